//! Roadmap client core
//!
//! The client side of the roadmap synchronization loop:
//! - [`TimelineState`]: authoritative local collections feeding the
//!   rendering collaborator
//! - [`SyncClient`]: bridges the local state and the snapshot store over an
//!   unreliable channel
//! - [`MutationController`]: turns discrete user intents into state changes
//!   followed by a save
//!
//! Control flow is `MutationController` -> `TimelineState` -> `SyncClient`
//! -> store; on startup the store rehydrates the state through
//! [`MutationController::load_all`]. Between saves the local state is the
//! source of truth and may diverge from the store.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod controller;
pub mod error;
pub mod sync;
pub mod timeline;

pub use controller::{ItemDraft, MutationController};
pub use error::SyncError;
pub use sync::SyncClient;
pub use timeline::{DateWindow, TimelineState};
