use bevy_ecs::prelude::Resource;

/// Simulation time and per-step delta.
///
/// Updated once per step by
/// [`update_world_time`](crate::systems::time::update_world_time) before
/// any other system runs; `time_scale` slows or speeds the whole
/// simulation without touching individual systems.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Total scaled seconds since the world was created.
    pub elapsed: f32,
    /// Scaled seconds covered by the current step.
    pub delta: f32,
    /// Multiplier applied to incoming deltas (1.0 = real time).
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}
