//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems and observers during execution.
//!
//! Overview
//! - `display` – requested display mode (resolution, fullscreen) read by the host
//! - `gameconfig` – INI-backed startup configuration
//! - `input` – edge-triggered cancel signal for the current frame
//! - `pause` – pause state and the pause menu/overlay handles
//! - `prefs` – durable key/value preference store
//! - `savegame` – the save record and its JSON file
//! - `scene` – scene transition request and optional collaborator
//! - `scheduler` – delayed panel actions ordered by deadline
//! - `settings` – settings controller state and widget bindings
//! - `worldtime` – scaled and real time, plus the global time scale
pub mod display;
pub mod gameconfig;
pub mod input;
pub mod pause;
pub mod prefs;
pub mod savegame;
pub mod scene;
pub mod scheduler;
pub mod settings;
pub mod worldtime;
