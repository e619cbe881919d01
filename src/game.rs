//! Demo scene setup and world helpers.
//!
//! Builds the headless demo the binary runs: a walled arena filled with
//! drifting boxes obtained from the shared [`Geometry`] pool. Some boxes
//! belong to the `"debris"` group and are despawned by the collision
//! observer on their first impact.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::info;

use crate::collision::{CollisionBox, Geometry, PositionChangeListener};
use crate::components::collider::Collider;
use crate::components::group::Group;
use crate::components::rigidbody::RigidBody;
use crate::events::collision::CollisionEvent;
use crate::resources::engineconfig::EngineConfig;
use crate::resources::worldtime::WorldTime;

const WALL_THICKNESS: f32 = 16.0;
const DRIFTER_SIZE: f32 = 8.0;
const DRIFTER_SPEED: f32 = 60.0;

/// Running totals collected by the demo observers.
#[derive(Resource, Debug, Default)]
pub struct CollisionStats {
    pub total: usize,
}

/// Position listener counting moved boxes, standing in for a spatial
/// index that refreshes an entry whenever its box reports movement.
#[derive(Debug, Default)]
pub struct MoveTracker {
    moved: AtomicUsize,
}

impl MoveTracker {
    pub fn moved_count(&self) -> usize {
        self.moved.load(Ordering::Relaxed)
    }
}

impl PositionChangeListener for MoveTracker {
    fn position_changed(&self, _moved: &CollisionBox) {
        self.moved.fetch_add(1, Ordering::Relaxed);
    }
}

/// Observer accumulating collision counts into [`CollisionStats`].
pub fn observe_count_collisions(_trigger: On<CollisionEvent>, mut stats: ResMut<CollisionStats>) {
    stats.total += 1;
}

/// Create the demo world with its resources in place.
pub fn setup_world(config: EngineConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        time_scale: config.time_scale,
        ..WorldTime::default()
    });
    world.insert_resource(config);
    world.init_resource::<CollisionStats>();
    world
}

/// Spawn the four static arena walls just inside the configured bounds.
pub fn spawn_walls(world: &mut World, geometry: &Geometry) {
    let (width, height) = world.resource::<EngineConfig>().arena_size();
    let walls = [
        (0.0, 0.0, width, WALL_THICKNESS),
        (0.0, height - WALL_THICKNESS, width, WALL_THICKNESS),
        (0.0, 0.0, WALL_THICKNESS, height),
        (width - WALL_THICKNESS, 0.0, WALL_THICKNESS, height),
    ];
    for (x, y, w, h) in walls {
        world.spawn((
            Collider::from_pool(geometry, x, y, w, h),
            Group::new("wall"),
        ));
    }
    info!("spawned 4 arena walls ({width}x{height})");
}

/// Spawn `count` drifting boxes with random positions and headings.
///
/// Every third drifter joins the `"debris"` group; `tracker` is
/// registered as a position listener on each box so the demo can report
/// how many movement notifications the step loop produced.
pub fn spawn_drifters(
    world: &mut World,
    geometry: &Geometry,
    count: u32,
    rng: &mut Rng,
    tracker: &Arc<MoveTracker>,
) {
    let (width, height) = world.resource::<EngineConfig>().arena_size();
    for index in 0..count {
        let x = WALL_THICKNESS + rng.f32() * (width - 2.0 * WALL_THICKNESS - DRIFTER_SIZE);
        let y = WALL_THICKNESS + rng.f32() * (height - 2.0 * WALL_THICKNESS - DRIFTER_SIZE);
        let heading = rng.f32() * std::f32::consts::TAU;

        let mut collider = Collider::from_pool(geometry, x, y, DRIFTER_SIZE, DRIFTER_SIZE);
        collider
            .bounds
            .add_position_change_listener(tracker.clone());

        let mut entity = world.spawn((
            collider,
            RigidBody::new().with_velocity(
                heading.cos() * DRIFTER_SPEED,
                heading.sin() * DRIFTER_SPEED,
            ),
        ));
        if index % 3 == 0 {
            entity.insert(Group::new("debris"));
        }
    }
    info!("spawned {count} drifters");
}
