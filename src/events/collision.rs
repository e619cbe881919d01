//! Collision event types and a simple observer.
//!
//! The detection system triggers [`CollisionEvent`] for every pair of
//! overlapping colliders each frame. Observers subscribe to react in a
//! decoupled manner (despawn, damage, sound, scoring).
//!
//! [`observe_despawn_debris_on_collision`] is the observer the demo scene
//! uses: short-lived `"debris"` entities disappear on their first impact.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::group::Group;

/// Event fired when two entities with [`Collider`](crate::components::collider::Collider)
/// components overlap.
///
/// `a` and `b` are the participating entities; no ordering guarantee is
/// made between them. One event fires per overlapping pair per detector
/// run, including on consecutive frames while the overlap persists.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

/// Observer that despawns `"debris"`-group entities when they collide
/// with anything.
///
/// Entities outside the `"debris"` group are untouched, so walls and
/// drifting bodies survive their impacts. The observer runs in the
/// immediate observer flow; both entities still exist at this point.
pub fn observe_despawn_debris_on_collision(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    groups: Query<&Group>,
) {
    let event = trigger.event();
    for entity in [event.a, event.b] {
        let is_debris = groups
            .get(entity)
            .map(|group| group.name() == "debris")
            .unwrap_or(false);
        if is_debris {
            debug!("despawning debris {entity:?} after impact");
            commands.entity(entity).despawn();
        }
    }
}
