//! Store synchronization
//!
//! Bridges the local timeline state and the snapshot store. Every push
//! carries the entire local state plus a save sequence number from an
//! atomic counter, so a save that completes out of order can no longer
//! overwrite a fresher one: the store rejects it and the reply comes back
//! with `ok: false`.
//!
//! Saves are issued after every single mutation with no debouncing or
//! batching; N rapid edits issue N independent requests, each carrying the
//! full snapshot as of that moment.

use crate::error::SyncError;
use roadmap_model::{Group, Item, OkReply, Snapshot, SnapshotPatch};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// HTTP bridge to the snapshot store
#[derive(Debug, Clone)]
pub struct SyncClient {
    http: reqwest::Client,
    base_url: String,
    seq: Arc<AtomicU64>,
}

impl SyncClient {
    /// Create a client for the given API base URL (e.g. `http://host:3001/api`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Fetch the current snapshot from the store
    pub async fn fetch(&self) -> Result<Snapshot, SyncError> {
        let snapshot = self
            .http
            .get(format!("{}/data", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<Snapshot>()
            .await?;
        Ok(snapshot)
    }

    /// Push the entire local state as one replace call
    pub async fn push(&self, groups: Vec<Group>, items: Vec<Item>) -> Result<(), SyncError> {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let patch = SnapshotPatch::full(groups, items).with_seq(seq);

        let reply = self
            .http
            .post(format!("{}/data", self.base_url))
            .json(&patch)
            .send()
            .await?
            .error_for_status()?
            .json::<OkReply>()
            .await?;

        if reply.ok {
            Ok(())
        } else {
            Err(SyncError::StaleSave { seq })
        }
    }

    /// Fire-and-forget push: spawn the request and return immediately.
    ///
    /// The mutation path does not await save completion. Failures are
    /// logged, never surfaced; there is no retry, backoff, or queueing. A
    /// failed save leaves the store behind the local view until the next
    /// successful one.
    pub fn push_detached(&self, groups: Vec<Group>, items: Vec<Item>) {
        let client = self.clone();
        tokio::spawn(async move {
            match client.push(groups, items).await {
                Ok(()) => {}
                Err(err) if err.is_stale() => {
                    tracing::debug!("save superseded: {err}");
                }
                Err(err) => {
                    tracing::warn!("save failed: {err}");
                }
            }
        });
    }
}
