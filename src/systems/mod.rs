//! ECS systems and observers.
//!
//! - `panels` – panel switch/toggle observers and their delayed variants
//! - `pause` – cancel-key polling and the pause/resume/quit observers
//! - `scheduler` – fires delayed actions whose deadline has passed
//! - `settings` – settings initialization, widget wiring and apply observers
//! - `time` – advances `WorldTime` once per frame
pub mod panels;
pub mod pause;
pub mod scheduler;
pub mod settings;
pub mod time;
