//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per tick, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed seconds, delta and tick count on the `WorldTime` resource.
///
/// `dt` is the unscaled tick delta in seconds; negative values are treated
/// as zero. The current `time_scale` is applied before writing `elapsed`
/// and `delta`, so a scale of zero freezes every dt-driven system.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt.max(0.0) * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}
