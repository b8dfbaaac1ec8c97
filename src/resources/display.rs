//! Display mode resource.
//!
//! [`DisplaySettings`] is the display the game asks for: resolution and
//! fullscreen flag. The settings controller writes it, and the host applies
//! it to the real window whenever the resource changes.

use bevy_ecs::prelude::Resource;
use std::fmt;

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse `"1280x720"` or `"1280 x 720"`.
    pub fn parse(text: &str) -> Option<Self> {
        let (w, h) = text.split_once(['x', 'X'])?;
        let width = w.trim().parse().ok()?;
        let height = h.trim().parse().ok()?;
        Some(Self { width, height })
    }
}

/// Label used for dropdown options.
impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// Resolutions always offered in the settings dropdown.
pub const PRESET_RESOLUTIONS: [Resolution; 5] = [
    Resolution::new(1920, 1080),
    Resolution::new(1600, 900),
    Resolution::new(1366, 768),
    Resolution::new(1280, 720),
    Resolution::new(1024, 768),
];

/// Build the resolution candidate list.
///
/// Keeps the first occurrence of each preset and prepends `current` when it
/// is not already listed. The result never contains duplicates and always
/// contains `current`.
pub fn build_resolution_list(presets: &[Resolution], current: Resolution) -> Vec<Resolution> {
    let mut list: Vec<Resolution> = Vec::with_capacity(presets.len() + 1);
    for preset in presets {
        if !list.contains(preset) {
            list.push(*preset);
        }
    }
    if !list.contains(&current) {
        list.insert(0, current);
    }
    list
}

/// Requested display mode.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    resolution: Resolution,
    fullscreen: bool,
}

impl DisplaySettings {
    pub fn new(width: u32, height: u32, fullscreen: bool) -> Self {
        Self {
            resolution: Resolution::new(width, height),
            fullscreen,
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn set_resolution(&mut self, width: u32, height: u32, fullscreen: bool) {
        self.resolution = Resolution::new(width, height);
        self.fullscreen = fullscreen;
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }
}
