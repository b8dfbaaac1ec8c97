//! Save slot resource.
//!
//! Holds the current [`SaveRecord`] and the path of the JSON file it is
//! written to. Saving replaces the whole file; loading replaces the whole
//! record. There is no versioning and no atomic rename, so a crash in the
//! middle of a write can leave a truncated file behind.

use bevy_ecs::prelude::Resource;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::resources::gameconfig::GameConfig;

/// The data persisted in the save slot.
///
/// Serialized as `{"character":1,"characterName":"Hero"}`. Keys missing from
/// the file fall back to their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SaveRecord {
    pub character: i32,
    #[serde(rename = "characterName")]
    pub character_name: String,
}

/// Result of [`SaveSlot::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and the record replaced.
    Loaded,
    /// No file at the path; the record is unchanged.
    NotFound(PathBuf),
    /// The file exists but could not be read or parsed; the record is unchanged.
    Failed(String),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded)
    }
}

/// Save slot resource bound to one file.
#[derive(Resource, Debug, Clone)]
pub struct SaveSlot {
    record: SaveRecord,
    path: PathBuf,
}

impl SaveSlot {
    /// Bind a slot to `dir/file_name` with an empty record.
    pub fn new(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            record: SaveRecord::default(),
            path: dir.as_ref().join(file_name),
        }
    }

    /// Bind a slot to the save file named by the configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            record: SaveRecord::default(),
            path: config.save_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &SaveRecord {
        &self.record
    }

    /// Overwrite the record and write it to disk.
    ///
    /// The in-memory record is updated even when the write fails.
    pub fn save(&mut self, character: i32, character_name: &str) -> Result<PathBuf, String> {
        self.record.character = character;
        self.record.character_name = character_name.to_string();

        let json = serde_json::to_string(&self.record)
            .map_err(|e| format!("Failed to serialize save record: {}", e))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create {:?}: {}", parent, e))?;
            }
        }
        std::fs::write(&self.path, json)
            .map_err(|e| format!("Failed to write save file {:?}: {}", self.path, e))?;

        info!("Game saved to {:?}", self.path);
        Ok(self.path.clone())
    }

    /// Replace the record with the contents of the save file, if any.
    pub fn load(&mut self) -> LoadOutcome {
        if !self.path.exists() {
            warn!("Save file not found at {:?}", self.path);
            return LoadOutcome::NotFound(self.path.clone());
        }

        let parsed = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read save file {:?}: {}", self.path, e))
            .and_then(|json| {
                serde_json::from_str::<SaveRecord>(&json)
                    .map_err(|e| format!("Malformed save file {:?}: {}", self.path, e))
            });

        match parsed {
            Ok(record) => {
                self.record = record;
                info!("Game loaded from {:?}", self.path);
                LoadOutcome::Loaded
            }
            Err(e) => {
                warn!("{}", e);
                LoadOutcome::Failed(e)
            }
        }
    }
}
