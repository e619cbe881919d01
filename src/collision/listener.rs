//! Change listeners for collision entities.
//!
//! Dependent systems (spatial indexes, render caches) observe a
//! [`CollisionBox`] through these capabilities. Registries hold weak,
//! non-owning references: a listener's lifetime is independent of the shape
//! it observes, and a dropped listener is simply skipped on the next
//! notification.
//!
//! Notification is synchronous and runs in registration order. Adding the
//! same listener twice registers it twice and yields duplicate
//! notifications; removal drops the first matching occurrence only.

use std::fmt;
use std::sync::{Arc, Weak};

use smallvec::SmallVec;

use super::collisionbox::CollisionBox;

/// Capability notified whenever an observed box changes position.
pub trait PositionChangeListener: Send + Sync {
    fn position_changed(&self, moved: &CollisionBox);
}

/// Capability notified whenever an observed box changes size.
///
/// Size changes move vertex coordinates too, but are reported only on this
/// channel; observers that care about any vertex movement must subscribe
/// to both channels.
pub trait SizeChangeListener: Send + Sync {
    fn size_changed(&self, changed: &CollisionBox);
}

/// Ordered collection of weak listener references.
///
/// Most boxes have zero or one listener, so entries live inline until the
/// registry grows past two.
pub(crate) struct ListenerList<T: ?Sized> {
    entries: SmallVec<[Weak<T>; 2]>,
}

impl<T: ?Sized> Default for ListenerList<T> {
    fn default() -> Self {
        ListenerList {
            entries: SmallVec::new(),
        }
    }
}

impl<T: ?Sized> ListenerList<T> {
    pub(crate) fn add(&mut self, listener: &Arc<T>) {
        self.entries.push(Arc::downgrade(listener));
    }

    /// Remove the first registration of `listener`, by identity.
    pub(crate) fn remove(&mut self, listener: &Arc<T>) {
        let target = Arc::as_ptr(listener) as *const ();
        if let Some(index) = self
            .entries
            .iter()
            .position(|weak| weak.as_ptr() as *const () == target)
        {
            self.entries.remove(index);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Invoke `f` for every live listener, in registration order.
    /// Dead references are skipped.
    pub(crate) fn notify(&self, mut f: impl FnMut(&T)) {
        for weak in &self.entries {
            if let Some(listener) = weak.upgrade() {
                f(listener.as_ref());
            }
        }
    }
}

impl<T: ?Sized> fmt::Debug for ListenerList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerList")
            .field("len", &self.entries.len())
            .finish()
    }
}
