//! Panel switching observers.
//!
//! - [`switch_panel_observer`] – show one panel of a [`PanelSwitcher`], hide the rest
//! - [`toggle_panels_observer`] – swap the shown state of two panels
//! - [`switch_panel_after_delay_observer`], [`toggle_panels_after_delay_observer`]
//!   – queue the same actions on [`ScheduledActions`]
//!
//! `switch` and `toggle` are deliberately different: a toggle only touches
//! the two panels it names, so other panels of the set may stay shown.

use crate::components::panelswitcher::PanelSwitcher;
use crate::components::uielement::UiElement;
use crate::events::panels::{
    SwitchPanelAfterDelayEvent, SwitchPanelEvent, TogglePanelsAfterDelayEvent, TogglePanelsEvent,
};
use crate::resources::scheduler::{ScheduledAction, ScheduledActions};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

/// Show the panel at `index` and hide all others.
///
/// Returns `false` (after logging a warning) when the switcher is missing,
/// has no panels, or `index` is out of range; nothing changes in that case.
pub fn switch_to_panel(
    switcher_entity: Entity,
    index: i32,
    switchers: &Query<&PanelSwitcher>,
    elements: &mut Query<&mut UiElement>,
) -> bool {
    let Ok(switcher) = switchers.get(switcher_entity) else {
        warn!("PanelSwitcher: entity {:?} has no panel switcher", switcher_entity);
        return false;
    };
    if switcher.is_empty() {
        warn!("PanelSwitcher: no panels assigned.");
        return false;
    }
    let Some(target) = switcher.slot(index) else {
        warn!(
            "PanelSwitcher: index {} is out of range (0..{}).",
            index,
            switcher.len() - 1
        );
        return false;
    };

    for (i, panel) in switcher.panels.iter().enumerate() {
        let Some(panel) = panel else { continue };
        match elements.get_mut(*panel) {
            Ok(mut element) => element.set_active(i == target),
            Err(_) => debug!("PanelSwitcher: panel {} ({:?}) not found", i, panel),
        }
    }

    if switcher.deactivate_self_on_switch {
        if let Ok(mut own) = elements.get_mut(switcher_entity) {
            own.set_active(false);
        }
    }
    true
}

/// Swap the shown state of panels `a` and `b`.
///
/// If `a` was shown it is hidden and `b` shown, and vice versa. Returns
/// `false` (after logging a warning) when either index is invalid or
/// unassigned.
pub fn toggle_between_panels(
    switcher_entity: Entity,
    a: i32,
    b: i32,
    switchers: &Query<&PanelSwitcher>,
    elements: &mut Query<&mut UiElement>,
) -> bool {
    let Ok(switcher) = switchers.get(switcher_entity) else {
        warn!("PanelSwitcher: entity {:?} has no panel switcher", switcher_entity);
        return false;
    };
    let (Some(panel_a), Some(panel_b)) = (switcher.panel(a), switcher.panel(b)) else {
        warn!(
            "PanelSwitcher: cannot toggle {} and {} in a set of {} panels",
            a,
            b,
            switcher.len()
        );
        return false;
    };
    let Ok(a_active) = elements.get(panel_a).map(|e| e.is_active()) else {
        warn!("PanelSwitcher: panel {} ({:?}) not found", a, panel_a);
        return false;
    };
    if elements.get(panel_b).is_err() {
        warn!("PanelSwitcher: panel {} ({:?}) not found", b, panel_b);
        return false;
    }

    if let Ok(mut element) = elements.get_mut(panel_a) {
        element.set_active(!a_active);
    }
    if let Ok(mut element) = elements.get_mut(panel_b) {
        element.set_active(a_active);
    }
    true
}

pub fn switch_panel_observer(
    trigger: On<SwitchPanelEvent>,
    switchers: Query<&PanelSwitcher>,
    mut elements: Query<&mut UiElement>,
) {
    let event = trigger.event();
    switch_to_panel(event.switcher, event.index, &switchers, &mut elements);
}

pub fn toggle_panels_observer(
    trigger: On<TogglePanelsEvent>,
    switchers: Query<&PanelSwitcher>,
    mut elements: Query<&mut UiElement>,
) {
    let event = trigger.event();
    toggle_between_panels(event.switcher, event.a, event.b, &switchers, &mut elements);
}

/// Queue a panel switch `delay` real seconds from now.
pub fn switch_panel_after_delay_observer(
    trigger: On<SwitchPanelAfterDelayEvent>,
    time: Res<WorldTime>,
    mut actions: ResMut<ScheduledActions>,
) {
    let event = trigger.event();
    let deadline = time.real_elapsed + event.delay.max(0.0);
    debug!(
        "Switch to panel {} scheduled at t={:.3}",
        event.index, deadline
    );
    actions.schedule(
        deadline,
        time.frame_count,
        ScheduledAction::SwitchPanel {
            switcher: event.switcher,
            index: event.index,
        },
    );
}

/// Queue a panel toggle `delay` real seconds from now.
pub fn toggle_panels_after_delay_observer(
    trigger: On<TogglePanelsAfterDelayEvent>,
    time: Res<WorldTime>,
    mut actions: ResMut<ScheduledActions>,
) {
    let event = trigger.event();
    let deadline = time.real_elapsed + event.delay.max(0.0);
    debug!(
        "Toggle of panels {} and {} scheduled at t={:.3}",
        event.a, event.b, deadline
    );
    actions.schedule(
        deadline,
        time.frame_count,
        ScheduledAction::TogglePanels {
            switcher: event.switcher,
            a: event.a,
            b: event.b,
        },
    );
}
