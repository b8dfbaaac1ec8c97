//! Save slot events and observers.
//!
//! UI buttons trigger [`SaveGameEvent`] / [`LoadGameEvent`]; the observers in
//! this module forward them to the [`SaveSlot`] resource. Failures are
//! logged by the slot and never escape the observer.

use crate::resources::savegame::SaveSlot;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error, warn};

/// Overwrite the save slot with the given character.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SaveGameEvent {
    pub character: i32,
    pub character_name: String,
}

/// Replace the in-memory record with the save file contents.
#[derive(Event, Debug, Clone, Copy)]
pub struct LoadGameEvent {}

/// Observer that writes the save slot when [`SaveGameEvent`] fires.
pub fn save_game_observer(trigger: On<SaveGameEvent>, slot: Option<ResMut<SaveSlot>>) {
    let Some(mut slot) = slot else {
        warn!("SaveGameEvent ignored: no SaveSlot resource");
        return;
    };
    let event = trigger.event();
    if let Err(e) = slot.save(event.character, &event.character_name) {
        error!("{}", e);
    }
}

/// Observer that loads the save slot when [`LoadGameEvent`] fires.
pub fn load_game_observer(_trigger: On<LoadGameEvent>, slot: Option<ResMut<SaveSlot>>) {
    let Some(mut slot) = slot else {
        warn!("LoadGameEvent ignored: no SaveSlot resource");
        return;
    };
    // Failures are logged by the slot
    if slot.load().is_loaded() {
        debug!(
            "Loaded character {} ({})",
            slot.record().character,
            slot.record().character_name
        );
    }
}
