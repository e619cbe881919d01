use std::fmt;
use std::sync::{Arc, Mutex};

use super::collisionbox::CollisionBox;

/// Shared pool of released collision boxes.
///
/// Obtaining boxes through a `Geometry` handle avoids per-frame garbage in
/// the update loop: [`CollisionBox::release`] returns an instance to the
/// free list, and the next [`Geometry::collision_box`] call reissues it
/// with a fresh id, empty listener registries and default bounds.
///
/// The handle is cheap to clone; clones share one free list. The inner
/// lock only makes shared ownership expressible — the pool is meant for
/// the single engine thread, and callers that allocate and release from
/// multiple threads must coordinate themselves.
#[derive(Clone, Default)]
pub struct Geometry {
    free_boxes: Arc<Mutex<Vec<CollisionBox>>>,
}

impl Geometry {
    pub fn new() -> Self {
        Geometry::default()
    }

    /// Pop a recycled box or construct a fresh one. Either way the result
    /// has a never-before-issued id, bounds (0, 0, 1, 1), zero rotation
    /// and no listeners.
    pub fn collision_box(&self) -> CollisionBox {
        let recycled = self
            .free_boxes
            .lock()
            .expect("geometry pool lock poisoned")
            .pop();
        match recycled {
            Some(mut collision_box) => {
                collision_box.reset_for_reuse(self.clone());
                collision_box
            }
            None => CollisionBox::pooled(self.clone()),
        }
    }

    /// Number of released boxes currently waiting for reissue.
    pub fn pooled_boxes(&self) -> usize {
        self.free_boxes
            .lock()
            .expect("geometry pool lock poisoned")
            .len()
    }

    pub(crate) fn reclaim(&self, mut collision_box: CollisionBox) {
        // Drop the back-reference while pooled so the free list does not
        // keep its own handle alive in a cycle.
        collision_box.detach_pool();
        self.free_boxes
            .lock()
            .expect("geometry pool lock poisoned")
            .push(collision_box);
    }
}

impl fmt::Debug for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Geometry")
            .field("pooled_boxes", &self.pooled_boxes())
            .finish()
    }
}
