//! Settings controller resource.
//!
//! Holds the widget bindings of the settings screen and the values the
//! controller last applied. The operations themselves live in
//! [`crate::systems::settings`].

use bevy_ecs::prelude::{Entity, Resource};

use crate::resources::display::Resolution;

/// References wired up by whoever builds the settings screen.
///
/// Every binding is optional; unbound widgets are simply not driven.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsBindings {
    /// [`Dropdown`](crate::components::widgets::Dropdown) listing resolutions.
    pub resolution_dropdown: Option<Entity>,
    /// [`Slider`](crate::components::widgets::Slider) for music volume.
    pub bgm_slider: Option<Entity>,
    /// [`Slider`](crate::components::widgets::Slider) for sound effect volume.
    pub sfx_slider: Option<Entity>,
    /// [`Toggle`](crate::components::widgets::Toggle) for fullscreen.
    pub fullscreen_toggle: Option<Entity>,
    /// Music source; discovered during initialization when left empty.
    pub bgm_source: Option<Entity>,
}

/// Settings controller state.
#[derive(Resource, Debug, Clone, Default)]
pub struct SettingsController {
    pub bindings: SettingsBindings,
    pub(crate) resolutions: Vec<Resolution>,
    pub(crate) bgm_source: Option<Entity>,
    pub(crate) sfx_sources: Vec<Entity>,
    pub(crate) bgm_volume: Option<f32>,
    pub(crate) sfx_volume: Option<f32>,
    pub(crate) resolution_index: Option<usize>,
    pub(crate) fullscreen: Option<bool>,
    pub(crate) initialized: bool,
}

impl SettingsController {
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Candidate resolutions, in dropdown order.
    pub fn resolutions(&self) -> &[Resolution] {
        &self.resolutions
    }

    /// Resolution at a dropdown index, if in range.
    pub fn resolution_at(&self, index: i32) -> Option<Resolution> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.resolutions.get(i).copied())
    }

    /// Index of `current` in the candidate list, or 0 when absent.
    pub fn index_of(&self, current: Resolution) -> usize {
        self.resolutions
            .iter()
            .position(|r| *r == current)
            .unwrap_or(0)
    }

    /// Dropdown labels for the candidate list.
    pub fn resolution_labels(&self) -> Vec<String> {
        self.resolutions.iter().map(|r| r.to_string()).collect()
    }

    /// Music source in use after discovery.
    pub fn bgm_source(&self) -> Option<Entity> {
        self.bgm_source
    }

    /// Sound effect sources in use after discovery.
    pub fn sfx_sources(&self) -> &[Entity] {
        &self.sfx_sources
    }

    /// Last music volume applied.
    pub fn bgm_volume(&self) -> Option<f32> {
        self.bgm_volume
    }

    /// Last sound effect volume applied.
    pub fn sfx_volume(&self) -> Option<f32> {
        self.sfx_volume
    }

    /// Last resolution index applied.
    pub fn resolution_index(&self) -> Option<usize> {
        self.resolution_index
    }

    /// Last fullscreen flag applied.
    pub fn fullscreen(&self) -> Option<bool> {
        self.fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::display::{PRESET_RESOLUTIONS, build_resolution_list};

    fn controller() -> SettingsController {
        let mut c = SettingsController::default();
        c.resolutions = build_resolution_list(&PRESET_RESOLUTIONS, Resolution::new(800, 600));
        c
    }

    #[test]
    fn test_resolution_at_bounds() {
        let c = controller();
        assert_eq!(c.resolution_at(0), Some(Resolution::new(800, 600)));
        assert_eq!(c.resolution_at(5), Some(Resolution::new(1024, 768)));
        assert_eq!(c.resolution_at(6), None);
        assert_eq!(c.resolution_at(-1), None);
    }

    #[test]
    fn test_index_of_defaults_to_zero() {
        let c = controller();
        assert_eq!(c.index_of(Resolution::new(1600, 900)), 2);
        assert_eq!(c.index_of(Resolution::new(1, 1)), 0);
    }

    #[test]
    fn test_labels() {
        let c = controller();
        let labels = c.resolution_labels();
        assert_eq!(labels[0], "800 x 600");
        assert_eq!(labels.len(), 6);
    }
}
