//! Testing utilities for the roadmap workspace
//!
//! Shared fixtures and an ephemeral-server helper.

#![allow(missing_docs)]

use chrono::NaiveDate;
use roadmap_model::{Group, GroupId, Item, Snapshot};
use roadmap_store::{bind_ephemeral, SnapshotStore};
use std::sync::Arc;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn sample_group(label: &str) -> Group {
    Group::new(label)
}

pub fn sample_item(group: GroupId, content: &str) -> Item {
    Item::new(group, content, date(2025, 1, 1), date(2025, 6, 1))
        .with_title("fixture comment")
        .with_style("background-color:#7dd3fc; border-color:#7dd3fc;")
}

pub fn sample_snapshot() -> Snapshot {
    let residential = sample_group("Residential Battery");
    let inverter = sample_group("Hybrid Inverter (3-phase)");
    let items = vec![
        sample_item(residential.id, "Gen 2 launch"),
        sample_item(inverter.id, "Firmware refresh"),
    ];
    Snapshot::new(vec![residential, inverter], items)
}

/// Spawn a seeded store on an OS-assigned port. Returns the API base URL
/// and a handle to the server-side store so tests can inspect it directly.
/// Must be called from within a tokio runtime.
pub fn spawn_store() -> (String, Arc<SnapshotStore>) {
    spawn_store_with(SnapshotStore::seeded())
}

/// Spawn a store with explicit initial contents.
pub fn spawn_store_with(store: SnapshotStore) -> (String, Arc<SnapshotStore>) {
    let store = Arc::new(store);
    let (addr, server) = bind_ephemeral(store.clone());
    tokio::spawn(server);
    (format!("http://{addr}/api"), store)
}
