//! Response-arrival sequencing.

use std::sync::atomic::{AtomicU64, Ordering};

/// Orders state mutations by response arrival for one operation kind.
///
/// Each arriving response takes the next arrival number; a mutation is
/// applied only if its number is higher than the last one applied. In a
/// single-threaded interleaving every response applies in arrival order,
/// so the last arrival wins; when two completed responses race for the
/// state lock on a multi-threaded runtime, the later arrival still wins
/// regardless of which task writes first.
#[derive(Debug, Default)]
pub(crate) struct ArrivalSequencer {
    arrived: AtomicU64,
    applied: AtomicU64,
}

impl ArrivalSequencer {
    /// Take the next arrival number. Called when a response arrives,
    /// before the state lock is taken.
    pub(crate) fn arrival(&self) -> u64 {
        self.arrived.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Record an application attempt. Must be called with state writes
    /// serialized. Returns false when a later arrival has already been
    /// applied.
    pub(crate) fn try_apply(&self, arrival: u64) -> bool {
        if arrival > self.applied.load(Ordering::Acquire) {
            self.applied.store(arrival, Ordering::Release);
            true
        } else {
            false
        }
    }
}
