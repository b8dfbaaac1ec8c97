//! Pause menu integration tests: cancel key edge, time scale, pause UI and
//! quitting to the menu scene.

use bevy_ecs::prelude::*;

use menuworks::components::uielement::UiElement;
use menuworks::game::Game;
use menuworks::resources::gameconfig::GameConfig;
use menuworks::resources::pause::{PauseController, PauseStates};
use menuworks::resources::prefs::PrefsStore;
use menuworks::resources::savegame::SaveSlot;
use menuworks::resources::scene::{SceneChanger, SceneRequest};
use menuworks::resources::worldtime::WorldTime;

const DT: f32 = 0.25;

fn make_game(config: GameConfig) -> Game {
    let slot = SaveSlot::new(std::env::temp_dir(), "menuworks_pause_unused.json");
    Game::with_stores(config, PrefsStore::in_memory(), slot)
}

/// Game with a hidden pause menu and overlay wired into the controller.
fn game_with_pause_ui() -> (Game, Entity, Entity) {
    let mut game = make_game(GameConfig::new());
    let menu = game.world_mut().spawn(UiElement::hidden("Pause Menu")).id();
    let overlay = game
        .world_mut()
        .spawn(UiElement::hidden("Pause Overlay"))
        .id();
    game.set_pause_ui(Some(menu), Some(overlay));
    game.initialize();
    (game, menu, overlay)
}

fn is_shown(game: &Game, entity: Entity) -> bool {
    game.world().get::<UiElement>(entity).unwrap().is_active()
}

fn time_scale(game: &Game) -> f32 {
    game.world().resource::<WorldTime>().time_scale
}

fn is_paused(game: &Game) -> bool {
    game.world().resource::<PauseController>().is_paused()
}

#[test]
fn cancel_press_pauses_and_shows_ui() {
    let (mut game, menu, overlay) = game_with_pause_ui();

    game.tick(DT, true);

    assert!(is_paused(&game));
    assert_eq!(time_scale(&game), 0.0);
    assert!(is_shown(&game, menu));
    assert!(is_shown(&game, overlay));
}

#[test]
fn second_cancel_press_resumes_and_hides_ui() {
    let (mut game, menu, overlay) = game_with_pause_ui();

    game.tick(DT, true);
    game.tick(DT, false);
    game.tick(DT, true);

    assert!(!is_paused(&game));
    assert_eq!(time_scale(&game), 1.0);
    assert!(!is_shown(&game, menu));
    assert!(!is_shown(&game, overlay));
}

#[test]
fn holding_cancel_toggles_once() {
    let (mut game, _, _) = game_with_pause_ui();

    for _ in 0..5 {
        game.tick(DT, true);
    }

    assert!(is_paused(&game));
}

#[test]
fn pause_state_follows_press_parity() {
    let (mut game, _, _) = game_with_pause_ui();

    for presses in 1..=6 {
        game.tick(DT, true);
        game.tick(DT, false);
        assert_eq!(is_paused(&game), presses % 2 == 1);
        let expected = if presses % 2 == 1 { 0.0 } else { 1.0 };
        assert_eq!(time_scale(&game), expected);
    }
}

#[test]
fn scaled_time_stops_while_paused() {
    let (mut game, _, _) = game_with_pause_ui();

    game.tick(DT, false);
    game.tick(DT, true); // pauses; scaled delta of this frame still counts
    let elapsed = game.world().resource::<WorldTime>().elapsed;
    game.tick(DT, false);
    game.tick(DT, false);

    let time = game.world().resource::<WorldTime>();
    assert_eq!(time.elapsed, elapsed);
    assert_eq!(time.real_elapsed, 1.0);
}

#[test]
fn explicit_pause_and_resume() {
    let (mut game, menu, _) = game_with_pause_ui();

    game.pause();
    assert_eq!(
        game.world().resource::<PauseController>().state(),
        PauseStates::Paused
    );
    assert!(is_shown(&game, menu));

    game.resume();
    assert_eq!(
        game.world().resource::<PauseController>().state(),
        PauseStates::Running
    );
    assert!(!is_shown(&game, menu));
    assert_eq!(time_scale(&game), 1.0);
}

#[test]
fn pause_without_ui_still_freezes_time() {
    let mut game = make_game(GameConfig::new());
    game.initialize();

    game.tick(DT, true);

    assert!(is_paused(&game));
    assert_eq!(time_scale(&game), 0.0);
}

#[test]
fn despawned_pause_ui_is_skipped() {
    let (mut game, menu, _) = game_with_pause_ui();
    game.world_mut().despawn(menu);

    game.toggle_pause();

    assert!(is_paused(&game));
    assert_eq!(time_scale(&game), 0.0);
}

#[test]
fn initialize_hides_visible_pause_ui() {
    let mut game = make_game(GameConfig::new());
    let menu = game.world_mut().spawn(UiElement::shown("Pause Menu")).id();
    game.set_pause_ui(Some(menu), None);
    game.world_mut()
        .resource_mut::<WorldTime>()
        .set_time_scale(0.0);

    game.initialize();

    assert!(!is_shown(&game, menu));
    assert!(!is_paused(&game));
    assert_eq!(time_scale(&game), 1.0);
}

#[test]
fn quit_to_menu_restores_time_and_requests_menu_scene() {
    let mut config = GameConfig::new();
    config.menu_scene = 2;
    let mut game = make_game(config);
    game.initialize();
    game.pause();

    game.quit_to_menu();

    assert_eq!(time_scale(&game), 1.0);
    // Pause state is left to the next scene
    assert!(is_paused(&game));
    assert_eq!(game.take_scene_request(), Some(2));
    assert_eq!(game.take_scene_request(), None);
}

#[derive(Resource, Default)]
struct MenuLoads(u32);

fn load_menu(mut loads: ResMut<MenuLoads>) {
    loads.0 += 1;
}

#[test]
fn quit_to_menu_prefers_scene_changer() {
    let mut game = make_game(GameConfig::new());
    game.world_mut().init_resource::<MenuLoads>();
    let go_to_menu = game.world_mut().register_system(load_menu);
    game.world_mut()
        .insert_resource(SceneChanger { go_to_menu });
    game.initialize();
    game.pause();

    game.quit_to_menu();

    assert_eq!(game.world().resource::<MenuLoads>().0, 1);
    assert_eq!(game.world().resource::<SceneRequest>().pending(), None);
    assert_eq!(time_scale(&game), 1.0);
}
