//! HTTP surface for the snapshot store
//!
//! JSON bodies throughout, permissive CORS for the browser client, no
//! authentication and no pagination. A replace request never fails from the
//! caller's point of view: malformed collection fields deserialize to absent
//! and are silently ignored; only a stale sequence number turns the reply's
//! `ok` to false.

use crate::store::SnapshotStore;
use roadmap_model::{OkReply, SnapshotPatch};
use std::net::SocketAddr;
use std::sync::Arc;
use warp::Filter;

const BODY_LIMIT: u64 = 64 * 1024;

/// Compose the three endpoints into one filter
pub fn routes(
    store: Arc<SnapshotStore>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let with_store = warp::any().map(move || store.clone());

    let health = warp::path!("api" / "health")
        .and(warp::get())
        .map(|| warp::reply::json(&OkReply { ok: true }));

    let read = warp::path!("api" / "data")
        .and(warp::get())
        .and(with_store.clone())
        .map(|store: Arc<SnapshotStore>| warp::reply::json(&store.read()));

    let save = warp::path!("api" / "data")
        .and(warp::post())
        .and(with_store)
        .and(warp::body::content_length_limit(BODY_LIMIT))
        .and(warp::body::json())
        .map(|store: Arc<SnapshotStore>, patch: SnapshotPatch| {
            let outcome = store.replace(patch);
            warp::reply::json(&OkReply {
                ok: outcome.is_applied(),
            })
        });

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    health.or(read).or(save).with(cors)
}

/// Serve the store on the given address until the process exits
pub async fn serve(store: Arc<SnapshotStore>, addr: impl Into<SocketAddr>) {
    warp::serve(routes(store)).run(addr).await;
}

/// Bind to an OS-assigned port; used by tests that need a real socket
#[must_use]
pub fn bind_ephemeral(
    store: Arc<SnapshotStore>,
) -> (SocketAddr, impl std::future::Future<Output = ()>) {
    warp::serve(routes(store)).bind_ephemeral(([127, 0, 0, 1], 0))
}
