//! Menuworks main entry point.
//!
//! Runs the demo scene in a raylib window when built with the `raylib`
//! feature, or a short scripted session in the terminal otherwise. A few
//! utility modes inspect or edit the persistent data and exit.
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features raylib
//! cargo run -- --save 2 Mage
//! cargo run -- --load
//! cargo run -- --list-resolutions 1366x768
//! cargo run -- --show-prefs
//! ```

// Do not create console on Windows
#![cfg_attr(
    all(target_os = "windows", feature = "raylib"),
    windows_subsystem = "windows"
)]

#[cfg(feature = "raylib")]
mod host;

use clap::Parser;
use menuworks::resources::display::{PRESET_RESOLUTIONS, Resolution, build_resolution_list};
use menuworks::resources::gameconfig::GameConfig;
use menuworks::resources::prefs::{PrefsStore, keys};
use menuworks::resources::savegame::{LoadOutcome, SaveSlot};
use std::path::PathBuf;

/// Pause menu, save slot, menu pages and settings screen.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding the save slot and preferences.
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Write the save slot and exit.
    #[arg(long, num_args = 2, value_names = ["CHARACTER", "NAME"])]
    save: Option<Vec<String>>,

    /// Print the save slot and exit.
    #[arg(long)]
    load: bool,

    /// Print the resolution list offered for a current mode such as 1366x768 and exit.
    #[arg(long, value_name = "WxH")]
    list_resolutions: Option<String>,

    /// Print the stored preferences and exit.
    #[arg(long)]
    show_prefs: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::info!("{}; using defaults", e);
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    // Early-exit utility modes (no window needed)
    if let Some(args) = cli.save {
        let (Some(character), Some(name)) = (args.first(), args.get(1)) else {
            eprintln!("Error: --save needs CHARACTER and NAME");
            std::process::exit(2);
        };
        let Ok(character) = character.parse::<i32>() else {
            eprintln!("Error: CHARACTER must be an integer, got {:?}", character);
            std::process::exit(2);
        };
        let mut slot = SaveSlot::from_config(&config);
        match slot.save(character, name) {
            Ok(path) => println!("Saved to {}", path.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.load {
        let mut slot = SaveSlot::from_config(&config);
        match slot.load() {
            LoadOutcome::Loaded => println!(
                "character={} name={}",
                slot.record().character,
                slot.record().character_name
            ),
            LoadOutcome::NotFound(path) => {
                eprintln!("No save file at {}", path.display());
                std::process::exit(1);
            }
            LoadOutcome::Failed(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(text) = cli.list_resolutions {
        let Some(current) = Resolution::parse(&text) else {
            eprintln!("Error: expected WIDTHxHEIGHT, got {:?}", text);
            std::process::exit(2);
        };
        for (i, resolution) in build_resolution_list(&PRESET_RESOLUTIONS, current)
            .iter()
            .enumerate()
        {
            println!("{}: {}", i, resolution);
        }
        return;
    }

    if cli.show_prefs {
        let prefs = PrefsStore::open(config.prefs_path());
        for key in [
            keys::BGM_VOLUME,
            keys::SFX_VOLUME,
            keys::RESOLUTION_INDEX,
            keys::FULLSCREEN,
        ] {
            match prefs.get(key) {
                Some(value) => println!("{} = {:?}", key, value),
                None => println!("{} = (unset)", key),
            }
        }
        return;
    }

    run(config);
}

#[cfg(feature = "raylib")]
fn run(config: GameConfig) {
    host::run(config);
}

#[cfg(not(feature = "raylib"))]
fn run(config: GameConfig) {
    use menuworks::demo::{DemoScene, PANEL_NAMES};
    use menuworks::game::Game;
    use menuworks::resources::worldtime::WorldTime;

    log::info!("Built without the raylib feature; running a short headless session");
    let dt = 1.0 / config.target_fps.max(1) as f32;
    let mut game = Game::new(config);
    let scene = DemoScene::spawn(&mut game);
    game.initialize();

    // Escape down: pause, then queue a page switch that lands while paused
    game.tick(dt, true);
    game.switch_to_panel_after_delay(scene.switcher, 2, 0.25);
    for _ in 0..60 {
        game.tick(dt, false);
    }
    // Escape again: resume
    game.tick(dt, true);
    game.tick(dt, false);

    let time = game.world().resource::<WorldTime>();
    let page = scene
        .active_panel(game.world())
        .and_then(|i| PANEL_NAMES.get(i))
        .copied()
        .unwrap_or("none");
    println!(
        "frames={} real={:.2}s game={:.2}s page={}",
        time.frame_count, time.real_elapsed, time.elapsed, page
    );
}
