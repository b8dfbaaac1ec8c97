//! Settings widgets.
//!
//! Minimal value holders for the controls of the settings screen. The
//! renderer draws them and writes user edits back; the settings systems
//! react to the changes.

use bevy_ecs::prelude::Component;

/// Drop-down list of string options with one selected index.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct Dropdown {
    pub options: Vec<String>,
    value: usize,
}

impl Dropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_options(&mut self) {
        self.options.clear();
        self.value = 0;
    }

    pub fn add_options(&mut self, options: impl IntoIterator<Item = String>) {
        self.options.extend(options);
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Select `value`, clamped to the last option.
    pub fn set_value(&mut self, value: usize) {
        self.value = value.min(self.options.len().saturating_sub(1));
    }

    pub fn selected(&self) -> Option<&str> {
        self.options.get(self.value).map(String::as_str)
    }
}

/// Horizontal slider over `[min, max]`.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Slider {
    pub min: f32,
    pub max: f32,
    value: f32,
}

impl Default for Slider {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            value: 0.0,
        }
    }
}

impl Slider {
    /// Unit slider starting at `value`.
    pub fn new(value: f32) -> Self {
        let mut slider = Self::default();
        slider.set_value(value);
        slider
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamped to `[min, max]`. NaN moves the slider to `min`.
    pub fn set_value(&mut self, value: f32) {
        self.value = if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        };
    }
}

/// On/off switch.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Toggle {
    pub on: bool,
}
