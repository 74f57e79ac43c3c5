//! Roadmap data model
//!
//! The shared vocabulary of the roadmap system:
//! - Identifiers for groups and items
//! - The `Group`, `Item` and `Snapshot` types
//! - Partial-update payloads (`ItemPatch`, `SnapshotPatch`)
//! - Wire replies (`OkReply`)
//!
//! A `Snapshot` is the unit of persistence and transfer: the complete
//! `{groups, items}` pair representing all roadmap state at one instant.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod ids;
pub mod snapshot;

pub use ids::{GroupId, ItemId};
pub use snapshot::{Group, Item, ItemPatch, OkReply, Snapshot, SnapshotPatch};
