//! Scene transition resources.
//!
//! Leaving gameplay for the main menu is delegated to an optional
//! [`SceneChanger`] collaborator (for example a system that plays a fade
//! before switching). Without one, the request falls back to
//! [`SceneRequest`], which the host polls to load a scene by index.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;

/// Optional collaborator that knows how to navigate to the menu scene.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SceneChanger {
    /// Registered system run when the player quits to the menu.
    pub go_to_menu: SystemId,
}

/// Pending request to load a scene by index.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneRequest {
    pending: Option<usize>,
}

impl SceneRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request loading `index`, replacing any earlier request.
    pub fn load(&mut self, index: usize) {
        self.pending = Some(index);
    }

    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// Consume the pending request.
    pub fn take(&mut self) -> Option<usize> {
        self.pending.take()
    }
}
