//! Menuworks library.
//!
//! Front-end shell of a small game: pause menu, JSON save slot, panel
//! switching for menu pages, and display/volume settings persisted to a
//! preference store. Everything lives in a `bevy_ecs` world driven by
//! [`game::Game`], which a host loop initializes once and ticks every frame.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (UI elements, panel switchers, widgets, audio sources)
//! - [`demo`] – Demo scene used by the binary
//! - [`events`] – Events handled by observers (pause, panels, save slot, settings)
//! - [`game`] – The `initialize`/`tick` driver that owns the world and schedule
//! - [`resources`] – ECS resources (time, input, pause state, stores, configuration)
//! - [`systems`] – Per-frame systems and observers

pub mod components;
pub mod demo;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
