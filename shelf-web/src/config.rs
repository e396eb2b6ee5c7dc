//! Build-time configuration for the web app

/// Cloud function that serves the shelf payload.
pub const DEFAULT_ENDPOINT: &str =
    "https://europe-west3-rugged-shell-330515.cloudfunctions.net/goodreads_node";

/// Where the page loads its books from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShelfConfig {
    pub endpoint: String,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ShelfConfig {
    /// Config baked in at compile time.
    ///
    /// `SHELF_ENDPOINT` set in the build environment replaces the default
    /// endpoint. Nothing is read at runtime.
    pub fn from_build_env() -> Self {
        Self::with_endpoint_override(option_env!("SHELF_ENDPOINT"))
    }

    fn with_endpoint_override(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            Some(endpoint) => Self {
                endpoint: endpoint.to_string(),
            },
            None => Self::default(),
        }
    }
}
