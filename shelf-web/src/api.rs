use shelf_common::{BookCollections, ShelfError};
use tracing::{debug, info, warn};

/// Fetch the three book collections from the shelf endpoint.
///
/// A refused connection, a non-2xx status and an undecodable body all come
/// back as `Err`. The cause is logged here; callers only see that it failed.
pub async fn fetch_collections(endpoint: String) -> Result<BookCollections, ShelfError> {
    debug!("Fetching bookshelf from {endpoint}");

    let result = request(&endpoint).await;
    match &result {
        Ok(collections) => info!(
            "Bookshelf loaded: {} reading, {} read this year, {} favorites",
            collections.currently_reading.len(),
            collections.read_this_year.len(),
            collections.favorites.len(),
        ),
        Err(e) => warn!("Failed to load bookshelf: {e}"),
    }
    result
}

async fn request(endpoint: &str) -> Result<BookCollections, ShelfError> {
    let resp = reqwest::get(endpoint)
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(transport_error)?;

    let body = resp.bytes().await.map_err(transport_error)?;

    BookCollections::from_json(&body)
}

fn transport_error(err: reqwest::Error) -> ShelfError {
    match err.status() {
        Some(status) => ShelfError::Status(status.as_u16()),
        None => ShelfError::Network(err.to_string()),
    }
}
