//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update scaled and real time on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The scaled
/// clock advances by `dt * time_scale`; the real clock by `dt`. Negative
/// deltas are treated as zero.
pub fn update_world_time(world: &mut World, dt: f32) {
    let dt = dt.max(0.0);
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.real_elapsed += dt;
    wt.real_delta = dt;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frozen_time_still_advances_real_clock() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(0.0));

        update_world_time(&mut world, 0.5);

        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta, 0.0);
        assert_eq!(wt.elapsed, 0.0);
        assert_eq!(wt.real_delta, 0.5);
        assert_eq!(wt.real_elapsed, 0.5);
        assert_eq!(wt.frame_count, 1);
    }

    #[test]
    fn test_scaled_delta() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(0.5));

        update_world_time(&mut world, 1.0);
        update_world_time(&mut world, 1.0);

        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta, 0.5);
        assert_eq!(wt.elapsed, 1.0);
        assert_eq!(wt.real_elapsed, 2.0);
    }
}
