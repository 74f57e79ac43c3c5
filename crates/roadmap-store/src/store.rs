//! In-memory snapshot store
//!
//! A single owned state object with a defined seed value; there are no
//! hidden globals. Reads always succeed. Replacement is whole-collection,
//! not whole-snapshot: a caller can update items without touching groups.
//! The store validates neither id uniqueness nor referential integrity.

use parking_lot::RwLock;
use roadmap_model::{Group, Snapshot, SnapshotPatch};

/// Result of a replace call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The patch was applied
    Applied,
    /// The patch carried a sequence number at or below the last applied one
    /// and was rejected whole
    Stale,
}

impl ReplaceOutcome {
    /// Whether the patch took effect
    #[inline]
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, ReplaceOutcome::Applied)
    }
}

#[derive(Debug)]
struct StoreInner {
    snapshot: Snapshot,
    last_seq: u64,
}

/// Server-resident holder of the current roadmap snapshot
#[derive(Debug)]
pub struct SnapshotStore {
    inner: RwLock<StoreInner>,
}

impl SnapshotStore {
    /// Create a store with an explicit initial snapshot
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                snapshot: initial,
                last_seq: 0,
            }),
        }
    }

    /// Create a store holding the default seed snapshot: three product-line
    /// lanes and no items
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Snapshot::new(
            vec![
                Group::new("Hybrid Inverter (3-phase)"),
                Group::new("Hybrid Inverter (1-phase)"),
                Group::new("Residential Battery"),
            ],
            Vec::new(),
        ))
    }

    /// Return the current snapshot verbatim; always succeeds
    #[must_use]
    pub fn read(&self) -> Snapshot {
        self.inner.read().snapshot.clone()
    }

    /// Replace collections wholesale from a patch.
    ///
    /// Each present collection replaces the corresponding one; absent
    /// collections are left untouched. When the patch carries a sequence
    /// number, it is applied only if greater than the last applied sequence,
    /// and rejected whole otherwise, so the stored state always corresponds
    /// to a single completed save, never a mixture of two.
    pub fn replace(&self, patch: SnapshotPatch) -> ReplaceOutcome {
        let mut inner = self.inner.write();

        if let Some(seq) = patch.seq {
            if seq <= inner.last_seq {
                tracing::debug!(seq, last_seq = inner.last_seq, "rejecting stale save");
                return ReplaceOutcome::Stale;
            }
            inner.last_seq = seq;
        }

        if let Some(groups) = patch.groups {
            inner.snapshot.groups = groups;
        }
        if let Some(items) = patch.items {
            inner.snapshot.items = items;
        }

        ReplaceOutcome::Applied
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::seeded()
    }
}
