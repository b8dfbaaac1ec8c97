//! Per-frame input resource.
//!
//! The shell only reacts to one input: the cancel/escape key. The host feeds
//! the raw key level once per frame and [`BoolState::update`] derives the
//! press/release edges from it.
use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean key state with edges computed against the previous frame.
pub struct BoolState {
    /// Whether the key is currently held down.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Feed the key level for a new frame.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Resource capturing the per-frame input the shell cares about.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    /// Escape/cancel; toggles the pause menu on press.
    pub cancel: BoolState,
}
