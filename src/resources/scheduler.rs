//! Delayed UI actions.
//!
//! Panel switches requested "after N seconds" are queued here with an
//! absolute deadline on the real clock
//! ([`WorldTime::real_elapsed`](crate::resources::worldtime::WorldTime)).
//! [`run_scheduled_actions`](crate::systems::scheduler::run_scheduled_actions)
//! polls the queue once per tick. Entries cannot be cancelled.

use bevy_ecs::prelude::{Entity, Resource};

/// An action that can be deferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    SwitchPanel { switcher: Entity, index: i32 },
    TogglePanels { switcher: Entity, a: i32, b: i32 },
}

#[derive(Debug, Clone)]
struct Entry {
    deadline: f32,
    frame: u64,
    action: ScheduledAction,
}

/// Queue of pending actions sorted by deadline.
///
/// Entries with equal deadlines keep their insertion order.
#[derive(Resource, Debug, Clone, Default)]
pub struct ScheduledActions {
    queue: Vec<Entry>,
}

impl ScheduledActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to run once `deadline` is reached.
    ///
    /// `frame` is the frame the request was made on; the action never runs
    /// on that same frame.
    pub fn schedule(&mut self, deadline: f32, frame: u64, action: ScheduledAction) {
        let at = self.queue.partition_point(|e| e.deadline <= deadline);
        self.queue.insert(
            at,
            Entry {
                deadline,
                frame,
                action,
            },
        );
    }

    /// Remove and return every action due at `now` on frame `frame`, in order.
    pub fn take_due(&mut self, now: f32, frame: u64) -> Vec<ScheduledAction> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.queue.len() && self.queue[i].deadline <= now {
            if self.queue[i].frame < frame {
                due.push(self.queue.remove(i).action);
            } else {
                i += 1;
            }
        }
        due
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<f32> {
        self.queue.first().map(|e| e.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switch(index: i32) -> ScheduledAction {
        ScheduledAction::SwitchPanel {
            switcher: Entity::PLACEHOLDER,
            index,
        }
    }

    #[test]
    fn test_orders_by_deadline() {
        let mut queue = ScheduledActions::new();
        queue.schedule(3.0, 0, switch(3));
        queue.schedule(1.0, 0, switch(1));
        queue.schedule(2.0, 0, switch(2));
        assert_eq!(queue.next_deadline(), Some(1.0));

        let due = queue.take_due(10.0, 1);
        assert_eq!(due, vec![switch(1), switch(2), switch(3)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_deadlines_keep_insertion_order() {
        let mut queue = ScheduledActions::new();
        queue.schedule(1.0, 0, switch(0));
        queue.schedule(1.0, 0, switch(1));
        queue.schedule(1.0, 0, switch(2));
        assert_eq!(
            queue.take_due(1.0, 1),
            vec![switch(0), switch(1), switch(2)]
        );
    }

    #[test]
    fn test_not_due_before_deadline() {
        let mut queue = ScheduledActions::new();
        queue.schedule(1.5, 0, switch(0));
        assert!(queue.take_due(1.0, 5).is_empty());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.take_due(1.5, 6), vec![switch(0)]);
    }

    #[test]
    fn test_never_due_on_scheduling_frame() {
        let mut queue = ScheduledActions::new();
        queue.schedule(0.0, 4, switch(0));
        queue.schedule(0.0, 3, switch(1));
        assert_eq!(queue.take_due(0.0, 4), vec![switch(1)]);
        assert_eq!(queue.take_due(0.0, 5), vec![switch(0)]);
    }
}
