//! Delayed action system.
//!
//! Fires every [`ScheduledActions`] entry whose deadline has passed on the
//! real clock by triggering the matching panel event. Runs on real time, so
//! delays keep counting while the game is paused.

use crate::events::panels::{SwitchPanelEvent, TogglePanelsEvent};
use crate::resources::scheduler::{ScheduledAction, ScheduledActions};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use log::debug;

pub fn run_scheduled_actions(
    time: Res<WorldTime>,
    mut actions: ResMut<ScheduledActions>,
    mut commands: Commands,
) {
    if actions.is_empty() {
        return;
    }
    for action in actions.take_due(time.real_elapsed, time.frame_count) {
        debug!("Running scheduled {:?}", action);
        match action {
            ScheduledAction::SwitchPanel { switcher, index } => {
                commands.trigger(SwitchPanelEvent { switcher, index });
            }
            ScheduledAction::TogglePanels { switcher, a, b } => {
                commands.trigger(TogglePanelsEvent { switcher, a, b });
            }
        }
    }
}
