//! ECS components used by the shell.
//!
//! - `audiosource` – audio outputs, the music tag and sound effect emitters
//! - `panelswitcher` – an ordered set of panels with exactly-one-active switching
//! - `uielement` – show/hide flag for panels, overlays and menus
//! - `widgets` – dropdown, slider and toggle values bound by the settings screen
pub mod audiosource;
pub mod panelswitcher;
pub mod uielement;
pub mod widgets;
