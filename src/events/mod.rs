//! Event types used across systems and observers.
//!
//! Events decouple whoever requests an action (a button, a key, a delayed
//! queue entry) from the observer that carries it out.
//!
//! - `panels` – immediate and delayed panel switches and toggles
//! - `pause` – pause, resume, toggle and quit-to-menu requests
//! - `savegame` – save/load requests for the save slot, with their observers
//! - `settings` – resolution, fullscreen and volume changes
pub mod panels;
pub mod pause;
pub mod savegame;
pub mod settings;
