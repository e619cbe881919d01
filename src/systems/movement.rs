//! Movement integration system.
//!
//! Advances every collider by its rigid body velocity. Position updates go
//! through [`CollisionBox::set_position`](crate::collision::CollisionBox::set_position),
//! so each moved box fires at most one position notification per step and
//! boxes with zero effective velocity fire none.

use bevy_ecs::prelude::*;

use crate::components::collider::Collider;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate velocities into collider positions for the current step.
///
/// Friction damping and the optional speed clamp are applied to the body
/// before the position update. Frozen bodies are skipped entirely.
pub fn movement_system(
    mut query: Query<(&mut Collider, &mut RigidBody)>,
    time: Res<WorldTime>,
) {
    for (mut collider, mut body) in query.iter_mut() {
        if body.frozen {
            continue;
        }
        if body.friction > 0.0 {
            let damping = (1.0 - body.friction * time.delta).max(0.0);
            body.velocity = body.velocity.scale_by(damping);
        }
        if let Some(max_speed) = body.max_speed {
            let speed = body.speed();
            if speed > max_speed && speed > 0.0 {
                body.velocity = body.velocity.scale_by(max_speed / speed);
            }
        }
        let delta = body.velocity.scale_by(time.delta);
        let x = collider.bounds.x() + delta.x;
        let y = collider.bounds.y() + delta.y;
        collider.bounds.set_position(x, y);
    }
}
