//! End-to-end driver tests: a scripted session over the demo scene.

use menuworks::components::uielement::UiElement;
use menuworks::demo::DemoScene;
use menuworks::game::Game;
use menuworks::resources::gameconfig::GameConfig;
use menuworks::resources::pause::PauseController;
use menuworks::resources::prefs::PrefsStore;
use menuworks::resources::savegame::SaveSlot;
use menuworks::resources::settings::SettingsController;
use menuworks::resources::worldtime::WorldTime;

const DT: f32 = 0.25;

fn make_game() -> Game {
    let slot = SaveSlot::new(std::env::temp_dir(), "menuworks_tick_unused.json");
    Game::with_stores(GameConfig::new(), PrefsStore::in_memory(), slot)
}

#[test]
fn first_tick_initializes() {
    let mut game = make_game();
    let scene = DemoScene::spawn(&mut game);
    assert!(!game.is_initialized());

    game.tick(DT, false);

    assert!(game.is_initialized());
    assert!(game.world().resource::<SettingsController>().is_initialized());
    assert_eq!(scene.active_panel(game.world()), Some(0));
}

#[test]
fn frame_counter_and_clocks_advance() {
    let mut game = make_game();
    game.initialize();

    for _ in 0..4 {
        game.tick(DT, false);
    }

    let time = game.world().resource::<WorldTime>();
    assert_eq!(time.frame_count, 4);
    assert_eq!(time.real_elapsed, 1.0);
    assert_eq!(time.elapsed, 1.0);
    assert_eq!(time.delta, DT);
}

#[test]
fn scripted_session() {
    let mut game = make_game();
    let scene = DemoScene::spawn(&mut game);
    game.initialize();

    // Pause, then a delayed page switch lands while paused
    game.tick(DT, true);
    game.switch_to_panel_after_delay(scene.switcher, 2, 0.5);
    game.tick(DT, false);
    game.tick(DT, false);
    assert_eq!(scene.active_panel(game.world()), Some(2));
    assert!(game.world().resource::<PauseController>().is_paused());
    assert!(
        game.world()
            .get::<UiElement>(scene.pause_menu)
            .unwrap()
            .is_active()
    );

    // Resume
    game.tick(DT, true);
    assert!(!game.world().resource::<PauseController>().is_paused());
    let time = game.world().resource::<WorldTime>();
    assert_eq!(time.time_scale, 1.0);
    // Scaled time only counted the frame before the pause
    assert_eq!(time.elapsed, DT);
    assert_eq!(time.real_elapsed, 4.0 * DT);

    // Quit to menu from a fresh pause
    game.tick(DT, false);
    game.tick(DT, true);
    game.quit_to_menu();
    assert_eq!(game.take_scene_request(), Some(0));
    assert_eq!(game.world().resource::<WorldTime>().time_scale, 1.0);
}
