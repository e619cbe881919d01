use std::sync::atomic::{AtomicU32, Ordering};

/// Monotonic identity sequence for collision entities.
///
/// Ids are never reused for the lifetime of the process, so an entity
/// reissued by the pool can never compare equal to one released earlier.
pub(crate) struct IdSequence {
    next: AtomicU32,
}

impl IdSequence {
    pub(crate) const fn new() -> Self {
        IdSequence {
            next: AtomicU32::new(0),
        }
    }

    pub(crate) fn next_id(&self) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// The single process-wide sequence. Direct construction and pool reissue
/// both draw from here, keeping uniqueness across the two paths.
pub(crate) static COLLISION_IDS: IdSequence = IdSequence::new();
