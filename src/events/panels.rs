//! Panel switching events.
//!
//! `switcher` is the entity holding the
//! [`PanelSwitcher`](crate::components::panelswitcher::PanelSwitcher);
//! indices are signed so that bad input from UI bindings is reported rather
//! than wrapped.

use bevy_ecs::prelude::*;

/// Show the panel at `index` and hide every other panel of the set.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchPanelEvent {
    pub switcher: Entity,
    pub index: i32,
}

/// Swap the shown state of panels `a` and `b`, leaving the rest alone.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TogglePanelsEvent {
    pub switcher: Entity,
    pub a: i32,
    pub b: i32,
}

/// [`SwitchPanelEvent`] after `delay` real seconds.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SwitchPanelAfterDelayEvent {
    pub switcher: Entity,
    pub index: i32,
    pub delay: f32,
}

/// [`TogglePanelsEvent`] after `delay` real seconds.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TogglePanelsAfterDelayEvent {
    pub switcher: Entity,
    pub a: i32,
    pub b: i32,
    pub delay: f32,
}
