//! Durable key/value preference store.
//!
//! A flat map of small typed values (volumes, resolution index, fullscreen
//! flag) that survives restarts. Values live in memory and are written to an
//! INI file on [`PrefsStore::save`], one section per value type:
//!
//! ```ini
//! [float]
//! BGMVolume=0.5
//! SFXVolume=1
//!
//! [int]
//! ResolutionIndex=2
//! Fullscreen=0
//! ```
//!
//! Reading a key that is missing, or stored with a different type, yields
//! the caller's default.

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// Well-known preference keys.
pub mod keys {
    pub const BGM_VOLUME: &str = "BGMVolume";
    pub const SFX_VOLUME: &str = "SFXVolume";
    pub const RESOLUTION_INDEX: &str = "ResolutionIndex";
    pub const FULLSCREEN: &str = "Fullscreen";
}

const INT_SECTION: &str = "int";
const FLOAT_SECTION: &str = "float";
const STRING_SECTION: &str = "string";

/// A single stored preference value.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefValue {
    Int(i32),
    Float(f32),
    Str(String),
}

/// Preference store resource.
///
/// Created either in memory only (`path` is `None`, [`save`](Self::save) is
/// a no-op) or bound to a file via [`PrefsStore::open`].
#[derive(Resource, Debug, Clone, Default)]
pub struct PrefsStore {
    values: FxHashMap<String, PrefValue>,
    path: Option<PathBuf>,
    writes: u64,
}

impl PrefsStore {
    /// Create an empty store that never touches the disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Create a store bound to `path`, loading it when the file exists.
    ///
    /// An unreadable file is logged and the store starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: Some(path.into()),
            ..Self::default()
        };
        if store.path().is_some_and(|p| p.exists()) {
            if let Err(e) = store.load_from_file() {
                warn!("Preferences could not be read, starting empty: {}", e);
            }
        } else {
            debug!("No preference file at {:?}, starting empty", store.path);
        }
        store
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of times the store has been written to disk.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Replace the in-memory values with the contents of the bound file.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let Some(path) = self.path.clone() else {
            return Err("Preference store has no file".to_string());
        };
        let mut ini = Ini::new_cs();
        let map = ini
            .load(&path)
            .map_err(|e| format!("Failed to load preferences: {}", e))?;

        self.values.clear();
        for (section, entries) in map.iter() {
            for (key, raw) in entries.iter() {
                let Some(raw) = raw else { continue };
                let value = match section.as_str() {
                    INT_SECTION => raw.trim().parse::<i32>().ok().map(PrefValue::Int),
                    FLOAT_SECTION => raw.trim().parse::<f32>().ok().map(PrefValue::Float),
                    STRING_SECTION => Some(PrefValue::Str(raw.clone())),
                    _ => None,
                };
                match value {
                    Some(value) => {
                        self.values.insert(key.clone(), value);
                    }
                    None => warn!("Ignoring preference [{}] {}={}", section, key, raw),
                }
            }
        }

        info!("Loaded {} preferences from {:?}", self.values.len(), path);
        Ok(())
    }

    /// Write every value to the bound file, replacing its contents.
    ///
    /// In-memory stores return `Ok` without writing.
    pub fn save(&mut self) -> Result<(), String> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create {:?}: {}", parent, e))?;
            }
        }

        let mut ini = Ini::new_cs();
        for (key, value) in self.values.iter() {
            let (section, text) = match value {
                PrefValue::Int(v) => (INT_SECTION, v.to_string()),
                PrefValue::Float(v) => (FLOAT_SECTION, v.to_string()),
                PrefValue::Str(v) => (STRING_SECTION, v.clone()),
            };
            ini.set(section, key, Some(text));
        }
        ini.write(&path)
            .map_err(|e| format!("Failed to save preferences: {}", e))?;

        self.writes += 1;
        debug!("Saved preferences to {:?}", path);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&PrefValue> {
        self.values.get(key)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        match self.values.get(key) {
            Some(PrefValue::Float(v)) => *v,
            _ => default,
        }
    }

    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.values.get(key) {
            Some(PrefValue::Int(v)) => *v,
            _ => default,
        }
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(PrefValue::Str(v)) => v.clone(),
            _ => default.to_string(),
        }
    }

    pub fn set_float(&mut self, key: impl Into<String>, value: f32) {
        self.values.insert(key.into(), PrefValue::Float(value));
    }

    pub fn set_int(&mut self, key: impl Into<String>, value: i32) {
        self.values.insert(key.into(), PrefValue::Int(value));
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), PrefValue::Str(value.into()));
    }

    pub fn delete_key(&mut self, key: &str) -> Option<PrefValue> {
        self.values.remove(key)
    }

    pub fn delete_all(&mut self) {
        self.values.clear();
    }

    /// Set a float and write through to disk, logging any failure.
    pub fn store_float(&mut self, key: &str, value: f32) {
        self.set_float(key, value);
        self.flush();
    }

    /// Set an int and write through to disk, logging any failure.
    pub fn store_int(&mut self, key: &str, value: i32) {
        self.set_int(key, value);
        self.flush();
    }

    fn flush(&mut self) {
        if let Err(e) = self.save() {
            warn!("{}", e);
        }
    }
}
