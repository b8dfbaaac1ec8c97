//! Game configuration resource.
//!
//! Manages startup settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! fullscreen = false
//! target_fps = 60
//!
//! [storage]
//! data_dir = ./userdata
//! save_file = savefile.json
//! prefs_file = prefs.ini
//!
//! [scenes]
//! menu_scene = 0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::{Path, PathBuf};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_DATA_DIR: &str = "./userdata";
const DEFAULT_SAVE_FILE: &str = "savefile.json";
const DEFAULT_PREFS_FILE: &str = "prefs.ini";
const DEFAULT_MENU_SCENE: usize = 0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the initial window mode, where persistent data lives, and which
/// scene is the main menu.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Target frames per second.
    pub target_fps: u32,
    /// Root directory for save files and preferences.
    pub data_dir: PathBuf,
    /// File name of the save slot inside `data_dir`.
    pub save_file: String,
    /// File name of the preference store inside `data_dir`.
    pub prefs_file: String,
    /// Scene index loaded when quitting to the menu without a scene changer.
    pub menu_scene: usize,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            fullscreen: DEFAULT_FULLSCREEN,
            target_fps: DEFAULT_TARGET_FPS,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            save_file: DEFAULT_SAVE_FILE.to_string(),
            prefs_file: DEFAULT_PREFS_FILE.to_string(),
            menu_scene: DEFAULT_MENU_SCENE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Replace the persistent data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [storage] section
        if let Some(dir) = config.get("storage", "data_dir") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(file) = config.get("storage", "save_file") {
            self.save_file = file;
        }
        if let Some(file) = config.get("storage", "prefs_file") {
            self.prefs_file = file;
        }

        // [scenes] section
        if let Some(scene) = config.getuint("scenes", "menu_scene").ok().flatten() {
            self.menu_scene = scene as usize;
        }

        info!(
            "Loaded config: {}x{} window, fullscreen={}, fps={}, data_dir={:?}, menu_scene={}",
            self.window_width,
            self.window_height,
            self.fullscreen,
            self.target_fps,
            self.data_dir,
            self.menu_scene
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [storage] section
        config.set(
            "storage",
            "data_dir",
            Some(self.data_dir.to_string_lossy().into_owned()),
        );
        config.set("storage", "save_file", Some(self.save_file.clone()));
        config.set("storage", "prefs_file", Some(self.prefs_file.clone()));

        // [scenes] section
        config.set("scenes", "menu_scene", Some(self.menu_scene.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Full path of the save slot file.
    pub fn save_path(&self) -> PathBuf {
        self.data_dir.join(&self.save_file)
    }

    /// Full path of the preference store file.
    pub fn prefs_path(&self) -> PathBuf {
        self.data_dir.join(&self.prefs_file)
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Path of the configuration file this value was (or will be) read from.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}
