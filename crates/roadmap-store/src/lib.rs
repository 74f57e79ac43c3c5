//! Roadmap snapshot store
//!
//! Holds exactly one [`Snapshot`](roadmap_model::Snapshot) in memory and
//! serves it over a small JSON HTTP surface:
//! - `GET /api/health` - liveness probe
//! - `GET /api/data` - full current snapshot
//! - `POST /api/data` - whole-collection replacement
//!
//! The store lives for the process lifetime and is reset to a seed snapshot
//! on start; nothing survives a restart.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod http;
pub mod store;

pub use http::{bind_ephemeral, routes, serve};
pub use store::{ReplaceOutcome, SnapshotStore};
