//! Show/hide UI element component.
//!
//! Panels, the pause menu and its overlay are entities carrying a
//! [`UiElement`]. The renderer draws only active elements.

use bevy_ecs::prelude::Component;

/// A UI surface that is either fully shown or fully hidden.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct UiElement {
    pub name: String,
    active: bool,
}

impl UiElement {
    pub fn new(name: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            active,
        }
    }

    /// Shown element.
    pub fn shown(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Hidden element.
    pub fn hidden(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
