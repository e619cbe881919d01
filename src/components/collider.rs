use bevy_ecs::prelude::Component;

use crate::collision::{CollisionBox, Geometry};

/// Collision shape of an entity.
///
/// The component owns an observable [`CollisionBox`]; the box's position
/// is the entity's world position, so systems mutate it directly and any
/// registered change listeners fire as a side effect of movement.
#[derive(Component, Debug)]
pub struct Collider {
    pub bounds: CollisionBox,
}

impl Collider {
    /// Create a collider with the given world bounds.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Collider {
            bounds: CollisionBox::new(x, y, width, height),
        }
    }

    /// Create a collider from the shared geometry pool, recycling a
    /// released box when one is available.
    pub fn from_pool(geometry: &Geometry, x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut bounds = geometry.collision_box();
        bounds.set(x, y, width, height);
        Collider { bounds }
    }

    /// Release the owned box back to its pool, consuming the component.
    pub fn release(self) {
        self.bounds.release();
    }
}
