use bevy_ecs::prelude::Resource;

/// Game clock.
///
/// `delta`/`elapsed` are scaled by `time_scale` and stop while the game is
/// paused. `real_delta`/`real_elapsed` always advance with the host frame
/// time; delayed UI actions are measured against them.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub real_elapsed: f32,
    pub real_delta: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            real_elapsed: 0.0,
            real_delta: 0.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.set_time_scale(time_scale);
        self
    }

    /// Negative scales are treated as a full stop.
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale.max(0.0);
    }

    pub fn is_frozen(&self) -> bool {
        self.time_scale == 0.0
    }
}
