//! Pause menu events.
//!
//! Handled by the observers in [`crate::systems::pause`].

use bevy_ecs::prelude::*;

/// Pause when running, resume when paused.
#[derive(Event, Debug, Clone, Copy)]
pub struct TogglePauseEvent {}

/// Show the pause menu and freeze time.
#[derive(Event, Debug, Clone, Copy)]
pub struct PauseGameEvent {}

/// Hide the pause menu and restore time. Also used by the menu's close button.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResumeGameEvent {}

/// Leave gameplay for the main menu scene.
#[derive(Event, Debug, Clone, Copy)]
pub struct QuitToMenuEvent {}
