//! Hooks

use dioxus::prelude::*;
use shelf_common::{BookCollections, ShelfError, ShelfStatus};
use std::future::Future;
use tracing::debug;

/// Run `fetch` once for the lifetime of the calling component and report its status.
///
/// The request is a resource owned by the component scope. Re-renders reuse the
/// settled value; unmounting drops the in-flight task. `fetch` must not read
/// signals, since a read would subscribe the resource and re-issue the request.
pub fn use_shelf_status<F, Fut>(mut fetch: F) -> ShelfStatus
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<BookCollections, ShelfError>> + 'static,
{
    let resource = use_resource(move || {
        debug!("Starting shelf fetch");
        fetch()
    });
    let read = resource.read();
    let status = ShelfStatus::from_fetch((*read).as_ref());
    drop(read);
    status
}
