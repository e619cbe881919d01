//! Collision detection system.
//!
//! Checks every collider pair with the polygon-correct
//! [`CollisionBox::intersects`](crate::collision::CollisionBox::intersects)
//! test (rotated boxes included) and triggers one
//! [`CollisionEvent`](crate::events::collision::CollisionEvent) per
//! overlapping pair. Observers registered on the world react to the events
//! in the same schedule run.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::collider::Collider;
use crate::events::collision::CollisionEvent;

/// Detect overlapping collider pairs and trigger a [`CollisionEvent`] for
/// each.
///
/// Runs a full pairwise sweep; intended for the scene sizes this engine
/// targets. A broad phase can be layered on top by subscribing a spatial
/// index to the boxes' position listeners.
pub fn collision_detector(query: Query<(Entity, &Collider)>, mut commands: Commands) {
    let mut pairs: Vec<(Entity, Entity)> = Vec::new();

    for [(entity_a, collider_a), (entity_b, collider_b)] in query.iter_combinations() {
        if collider_a.bounds.intersects(&collider_b.bounds) {
            pairs.push((entity_a, entity_b));
        }
    }

    for (a, b) in pairs {
        trace!("collision between {a:?} and {b:?}");
        commands.trigger(CollisionEvent { a, b });
    }
}
