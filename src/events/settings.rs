use bevy_ecs::prelude::*;

/// The player picked a resolution from the dropdown.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionSelectedEvent {
    pub index: i32,
}

/// New background music volume; clamped to [0, 1] when applied.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct BgmVolumeEvent {
    pub volume: f32,
}

/// New sound effect volume; clamped to [0, 1] when applied.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SfxVolumeEvent {
    pub volume: f32,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenEvent {
    pub fullscreen: bool,
}
