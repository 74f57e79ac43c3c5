//! Client error taxonomy
//!
//! Deliberately shallow: a sync either fails in transport (network
//! unreachable, non-2xx status) or is rejected by the store as stale.
//! Neither is surfaced to the end user; callers log and move on.

/// Synchronization failure
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Network unreachable, connection refused, or non-2xx status
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store had already applied a newer save when this one arrived
    #[error("save {seq} rejected as stale")]
    StaleSave { seq: u64 },
}

impl SyncError {
    /// Whether the store state is still consistent after this failure
    /// (a stale rejection means a newer save already landed)
    #[inline]
    #[must_use]
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleSave { .. })
    }
}
