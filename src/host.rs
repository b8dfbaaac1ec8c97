//! raylib window host.
//!
//! Owns the window, feeds keyboard state and frame time into the [`Game`],
//! and applies what the game asks for: display mode, scene loads and
//! time scale (shown on screen). Nothing here decides game behavior.
//!
//! | Key          | Action                                  |
//! |--------------|-----------------------------------------|
//! | Escape       | Pause / resume                          |
//! | 1, 2, 3      | Show a menu page                        |
//! | T            | Toggle pages 0 and 1                    |
//! | D            | Show page 2 after one second            |
//! | Up / Down    | Music volume                            |
//! | Left / Right | Sound effect volume                     |
//! | R            | Next resolution                         |
//! | F            | Fullscreen on/off                       |
//! | F5 / F9      | Save / load the save slot               |
//! | Q            | Quit to menu                            |

use menuworks::components::audiosource::AudioSource;
use menuworks::components::uielement::UiElement;
use menuworks::components::widgets::{Dropdown, Slider, Toggle};
use menuworks::demo::DemoScene;
use menuworks::game::Game;
use menuworks::resources::display::DisplaySettings;
use menuworks::resources::gameconfig::GameConfig;
use menuworks::resources::pause::PauseController;
use menuworks::resources::savegame::SaveSlot;
use menuworks::resources::worldtime::WorldTime;
use raylib::prelude::*;

const VOLUME_STEP: f32 = 0.1;

fn nudge_slider(game: &mut Game, slider: bevy_ecs::entity::Entity, delta: f32) {
    if let Some(mut slider) = game.world_mut().get_mut::<Slider>(slider) {
        let value = slider.value();
        slider.set_value(value + delta);
    }
}

fn next_resolution(game: &mut Game, dropdown: bevy_ecs::entity::Entity) {
    if let Some(mut dropdown) = game.world_mut().get_mut::<Dropdown>(dropdown) {
        let count = dropdown.options.len().max(1);
        let next = (dropdown.value() + 1) % count;
        dropdown.set_value(next);
    }
}

fn flip_toggle(game: &mut Game, toggle: bevy_ecs::entity::Entity) {
    if let Some(mut toggle) = game.world_mut().get_mut::<Toggle>(toggle) {
        toggle.on = !toggle.on;
    }
}

fn poll_keys(rl: &RaylibHandle, game: &mut Game, scene: &DemoScene) {
    if rl.is_key_pressed(KeyboardKey::KEY_ONE) {
        game.switch_to_panel(scene.switcher, 0);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_TWO) {
        game.switch_to_panel(scene.switcher, 1);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_THREE) {
        game.switch_to_panel(scene.switcher, 2);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_T) {
        game.toggle_between_panels(scene.switcher, 0, 1);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_D) {
        game.switch_to_panel_after_delay(scene.switcher, 2, 1.0);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_UP) {
        nudge_slider(game, scene.bgm_slider, VOLUME_STEP);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_DOWN) {
        nudge_slider(game, scene.bgm_slider, -VOLUME_STEP);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        nudge_slider(game, scene.sfx_slider, VOLUME_STEP);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        nudge_slider(game, scene.sfx_slider, -VOLUME_STEP);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_R) {
        next_resolution(game, scene.resolution_dropdown);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_F) {
        flip_toggle(game, scene.fullscreen_toggle);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_F5) {
        game.save_game(1, "Hero");
    }
    if rl.is_key_pressed(KeyboardKey::KEY_F9) {
        game.load_game();
    }
    if rl.is_key_pressed(KeyboardKey::KEY_Q) {
        game.quit_to_menu();
    }
}

/// Bring the window in line with [`DisplaySettings`].
fn apply_display(rl: &mut RaylibHandle, applied: &mut DisplaySettings, wanted: DisplaySettings) {
    if *applied == wanted {
        return;
    }
    let res = wanted.resolution();
    if applied.resolution() != res {
        log::info!("Resizing window to {}", res);
        rl.set_window_size(res.width as i32, res.height as i32);
    }
    if rl.is_window_fullscreen() != wanted.is_fullscreen() {
        log::info!("Switching fullscreen to {}", wanted.is_fullscreen());
        rl.toggle_fullscreen();
    }
    *applied = wanted;
}

fn draw(d: &mut RaylibDrawHandle, game: &Game, scene: &DemoScene) {
    let world = game.world();
    d.clear_background(Color::RAYWHITE);

    let mut y = 20;
    for panel in scene.panels.iter() {
        if let Some(element) = world.get::<UiElement>(*panel) {
            let color = if element.is_active() {
                Color::BLACK
            } else {
                Color::LIGHTGRAY
            };
            d.draw_text(&element.name, 20, y, 20, color);
        }
        y += 30;
    }

    let time = world.resource::<WorldTime>();
    let display = world.resource::<DisplaySettings>();
    let bgm = world
        .get::<AudioSource>(scene.music)
        .map(|s| s.volume())
        .unwrap_or(0.0);
    let sfx = world
        .get::<AudioSource>(scene.sfx)
        .map(|s| s.volume())
        .unwrap_or(0.0);
    let record = world.resource::<SaveSlot>().record();
    let lines = [
        format!("time scale: {:.1}  game time: {:.2}", time.time_scale, time.elapsed),
        format!("music: {:.1}  sfx: {:.1}", bgm, sfx),
        format!(
            "display: {} fullscreen={}",
            display.resolution(),
            display.is_fullscreen()
        ),
        format!(
            "save: character={} name={:?}",
            record.character, record.character_name
        ),
    ];
    for line in lines.iter() {
        d.draw_text(line, 20, y, 10, Color::DARKGRAY);
        y += 16;
    }

    let overlay_shown = world
        .get::<UiElement>(scene.pause_overlay)
        .is_some_and(|e| e.is_active());
    if overlay_shown {
        let w = d.get_screen_width();
        let h = d.get_screen_height();
        d.draw_rectangle(0, 0, w, h, Color::new(0, 0, 0, 128));
    }
    if world.resource::<PauseController>().is_paused() {
        d.draw_text("PAUSED (Esc to resume, Q for menu)", 20, y + 10, 20, Color::RED);
    }
}

/// Open the window and run until it is closed.
pub fn run(config: GameConfig) {
    let (width, height) = config.window_size();
    let target_fps = config.target_fps;

    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .resizable()
        .title("Menuworks")
        .build();
    rl.set_target_fps(target_fps);
    // Escape is the pause key
    rl.set_exit_key(None);

    let mut game = Game::new(config);
    let scene = DemoScene::spawn(&mut game);
    game.initialize();

    let mut applied = DisplaySettings::new(width, height, rl.is_window_fullscreen());

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let cancel_down = rl.is_key_down(KeyboardKey::KEY_ESCAPE);

        poll_keys(&rl, &mut game, &scene);
        game.tick(dt, cancel_down);

        let wanted = *game.world().resource::<DisplaySettings>();
        apply_display(&mut rl, &mut applied, wanted);

        if let Some(scene_index) = game.take_scene_request() {
            log::info!("Loading scene {}", scene_index);
            game.switch_to_panel(scene.switcher, 0);
        }

        let mut d = rl.begin_drawing(&thread);
        draw(&mut d, &game, &scene);
    }
}
