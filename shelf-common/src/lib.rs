//! shelf-common - Data model shared by the bookshelf crates
//!
//! Pure types with no UI or I/O: the books served by the shelf endpoint,
//! the three collections they arrive in, and the lifecycle status of the
//! page that displays them.

mod book;
mod clock;
mod collections;
mod error;
mod shelf;
mod status;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;

pub use book::Book;
pub use clock::current_year;
pub use collections::BookCollections;
pub use error::ShelfError;
pub use shelf::Shelf;
pub use status::ShelfStatus;
