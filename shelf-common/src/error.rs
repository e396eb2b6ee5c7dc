use thiserror::Error;

/// Why the shelf could not be loaded.
///
/// The variants only matter for logs. Every one of them ends the page in
/// the same error state with the same message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShelfError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed shelf payload: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::Decode(err.to_string())
    }
}
