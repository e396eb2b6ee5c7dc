use crate::{BookCollections, ShelfError};

/// Lifecycle of the bookshelf page.
///
/// Starts in `Loading` and settles exactly once into `Loaded` or `Error`.
/// The collections only exist inside `Loaded`.
#[derive(Clone, Debug, PartialEq)]
pub enum ShelfStatus {
    Loading,
    Loaded(BookCollections),
    Error,
}

#[allow(clippy::derivable_impls)]
impl Default for ShelfStatus {
    fn default() -> Self {
        ShelfStatus::Loading
    }
}

impl ShelfStatus {
    /// Status for the state of the one-shot fetch: `None` while it is still
    /// in flight, `Some` once it has settled.
    pub fn from_fetch(result: Option<&Result<BookCollections, ShelfError>>) -> Self {
        match result {
            None => ShelfStatus::Loading,
            Some(Ok(collections)) => ShelfStatus::Loaded(collections.clone()),
            Some(Err(_)) => ShelfStatus::Error,
        }
    }

    pub fn collections(&self) -> Option<&BookCollections> {
        match self {
            ShelfStatus::Loaded(collections) => Some(collections),
            _ => None,
        }
    }

    /// Whether the fetch has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        !matches!(self, ShelfStatus::Loading)
    }
}
