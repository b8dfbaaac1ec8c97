//! Pause menu systems.
//!
//! - [`pause_input_system`] – polls the cancel key and requests a toggle
//! - [`toggle_pause_observer`], [`pause_game_observer`],
//!   [`resume_game_observer`] – flip [`PauseController`] state, show/hide the
//!   pause UI and drive [`WorldTime::time_scale`]
//! - [`quit_to_menu_observer`] – restores time and hands off to the scene
//!   collaborator or the scene request fallback
//! - [`reset_pause`] – one-shot setup system that starts the game running
//!
//! Unassigned or despawned pause UI is skipped; it never stops the state or
//! time scale from changing.

use crate::components::uielement::UiElement;
use crate::events::pause::{PauseGameEvent, QuitToMenuEvent, ResumeGameEvent, TogglePauseEvent};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::pause::{PauseController, PauseStates};
use crate::resources::scene::{SceneChanger, SceneRequest};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

/// Request a pause toggle when the cancel key went down this frame.
pub fn pause_input_system(input: Res<InputState>, mut commands: Commands) {
    if input.cancel.just_pressed {
        commands.trigger(TogglePauseEvent {});
    }
}

fn show(elements: &mut Query<&mut UiElement>, entity: Option<Entity>, active: bool) {
    let Some(entity) = entity else {
        return;
    };
    match elements.get_mut(entity) {
        Ok(mut element) => element.set_active(active),
        Err(_) => debug!("Pause UI element {:?} not found", entity),
    }
}

fn pause(
    controller: &mut PauseController,
    time: &mut WorldTime,
    elements: &mut Query<&mut UiElement>,
) {
    show(elements, controller.overlay, true);
    show(elements, controller.menu, true);
    time.set_time_scale(0.0);
    controller.set_state(PauseStates::Paused);
    info!("Game paused");
}

fn resume(
    controller: &mut PauseController,
    time: &mut WorldTime,
    elements: &mut Query<&mut UiElement>,
) {
    show(elements, controller.menu, false);
    show(elements, controller.overlay, false);
    time.set_time_scale(1.0);
    controller.set_state(PauseStates::Running);
    info!("Game resumed");
}

/// Observer that pauses a running game and resumes a paused one.
pub fn toggle_pause_observer(
    _trigger: On<TogglePauseEvent>,
    mut controller: ResMut<PauseController>,
    mut time: ResMut<WorldTime>,
    mut elements: Query<&mut UiElement>,
) {
    if controller.is_paused() {
        resume(&mut controller, &mut time, &mut elements);
    } else {
        pause(&mut controller, &mut time, &mut elements);
    }
}

/// Observer that shows the pause UI and freezes time.
pub fn pause_game_observer(
    _trigger: On<PauseGameEvent>,
    mut controller: ResMut<PauseController>,
    mut time: ResMut<WorldTime>,
    mut elements: Query<&mut UiElement>,
) {
    pause(&mut controller, &mut time, &mut elements);
}

/// Observer that hides the pause UI and restores time.
pub fn resume_game_observer(
    _trigger: On<ResumeGameEvent>,
    mut controller: ResMut<PauseController>,
    mut time: ResMut<WorldTime>,
    mut elements: Query<&mut UiElement>,
) {
    resume(&mut controller, &mut time, &mut elements);
}

/// One-shot setup: the game always starts running with the pause UI hidden.
pub fn reset_pause(
    mut controller: ResMut<PauseController>,
    mut time: ResMut<WorldTime>,
    mut elements: Query<&mut UiElement>,
) {
    resume(&mut controller, &mut time, &mut elements);
}

/// Observer that leaves gameplay for the menu scene.
///
/// The time scale is restored before anything else so the menu never starts
/// frozen. The pause state itself is left untouched.
pub fn quit_to_menu_observer(
    _trigger: On<QuitToMenuEvent>,
    mut time: ResMut<WorldTime>,
    changer: Option<Res<SceneChanger>>,
    config: Option<Res<GameConfig>>,
    mut request: ResMut<SceneRequest>,
    mut commands: Commands,
) {
    time.set_time_scale(1.0);
    if let Some(changer) = changer {
        info!("Quitting to menu through scene changer");
        commands.run_system(changer.go_to_menu);
    } else {
        let scene = config.map(|c| c.menu_scene).unwrap_or(0);
        info!("Quitting to menu: loading scene {}", scene);
        request.load(scene);
    }
}
