//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity consumed by the
//! movement system to advance an entity's [`Collider`](super::collider::Collider).
//! The `frozen` flag temporarily disables all movement for an entity whose
//! position is controlled externally.

use bevy_ecs::prelude::Component;

use crate::geom::Point;

/// Kinematic body storing velocity and damping parameters.
///
/// Intended to be written by game logic and consumed by
/// [`movement_system`](crate::systems::movement::movement_system), which
/// feeds the resulting deltas through the collider's batched `set` path.
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Point,
    /// Velocity damping factor. Applied as: velocity *= (1 - friction * delta).
    pub friction: f32,
    /// Optional maximum speed. If set, velocity magnitude is clamped to this value.
    pub max_speed: Option<f32>,
    /// When true, the movement system skips this entity entirely.
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity and no damping.
    pub fn new() -> Self {
        RigidBody {
            velocity: Point::default(),
            friction: 0.0,
            max_speed: None,
            frozen: false,
        }
    }

    /// Builder method to set the initial velocity.
    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Point::new(x, y);
        self
    }

    /// Builder method to set damping parameters.
    ///
    /// # Arguments
    /// * `friction` - Velocity damping (0.0 = none, ~5.0 = responsive drag)
    /// * `max_speed` - Optional velocity magnitude limit
    pub fn with_physics(mut self, friction: f32, max_speed: Option<f32>) -> Self {
        self.friction = friction;
        self.max_speed = max_speed;
        self
    }

    /// Current speed in world units per second.
    pub fn speed(&self) -> f32 {
        self.velocity.x.hypot(self.velocity.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let body = RigidBody::new();
        assert_eq!(body.velocity, Point::default());
        assert_eq!(body.friction, 0.0);
        assert!(body.max_speed.is_none());
        assert!(!body.frozen);
    }

    #[test]
    fn test_speed_magnitude() {
        let body = RigidBody::new().with_velocity(3.0, 4.0);
        assert!((body.speed() - 5.0).abs() < 1e-6);
    }
}
