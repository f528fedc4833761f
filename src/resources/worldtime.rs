//! Simulation clock resource.

use bevy_ecs::prelude::Resource;

/// Simulation clock shared by every update system.
///
/// `delta` is the scaled duration of the current tick; systems treat it as
/// their dt. Updated once per tick by
/// [`update_world_time`](crate::systems::time::update_world_time).
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since the world started.
    pub elapsed: f32,
    /// Scaled seconds covered by the current tick.
    pub delta: f32,
    /// Multiplier applied to incoming deltas. Zero freezes the world.
    pub time_scale: f32,
    /// Ticks run so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
