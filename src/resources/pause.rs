//! Pause state resource.
//!
//! Tracks whether gameplay is paused and which UI elements make up the pause
//! screen. See [`crate::systems::pause`] for the observers that flip it.

use bevy_ecs::prelude::{Entity, Resource};

/// Whether gameplay is running or frozen behind the pause menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PauseStates {
    #[default]
    Running,
    Paused,
}

/// Pause menu controller.
///
/// `menu` is the panel holding the pause buttons, `overlay` the full-screen
/// blocker drawn behind it. Either may be left unassigned.
#[derive(Resource, Debug, Clone, Default)]
pub struct PauseController {
    state: PauseStates,
    pub menu: Option<Entity>,
    pub overlay: Option<Entity>,
}

impl PauseController {
    /// Create a running controller with no UI assigned.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PauseStates {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == PauseStates::Paused
    }

    pub(crate) fn set_state(&mut self, state: PauseStates) {
        self.state = state;
    }
}
