//! Panel switcher component.
//!
//! Owns an ordered list of panel handles (e.g. main menu, buttons, settings)
//! addressed by index. See [`crate::systems::panels`] for the switching
//! observers.

use bevy_ecs::prelude::{Component, Entity};

/// Ordered set of panels, at most one of which is shown after a switch.
#[derive(Component, Clone, Debug, Default)]
pub struct PanelSwitcher {
    /// Panel handles in index order; `None` is an unassigned slot.
    pub panels: Vec<Option<Entity>>,
    /// Hide the switcher's own [`UiElement`](crate::components::uielement::UiElement)
    /// after a successful switch.
    pub deactivate_self_on_switch: bool,
}

impl PanelSwitcher {
    pub fn new(panels: impl IntoIterator<Item = Entity>) -> Self {
        Self {
            panels: panels.into_iter().map(Some).collect(),
            deactivate_self_on_switch: false,
        }
    }

    pub fn with_deactivate_self(mut self, deactivate: bool) -> Self {
        self.deactivate_self_on_switch = deactivate;
        self
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Convert `index` to a slot position if it lies in `0..len`.
    pub fn slot(&self, index: i32) -> Option<usize> {
        usize::try_from(index).ok().filter(|i| *i < self.panels.len())
    }

    /// Panel handle at `index`, if in range and assigned.
    pub fn panel(&self, index: i32) -> Option<Entity> {
        self.slot(index).and_then(|i| self.panels[i])
    }
}
