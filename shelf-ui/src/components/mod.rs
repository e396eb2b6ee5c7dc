//! Shared UI components

pub mod book_tile;
pub mod bookshelf;
pub mod helpers;
pub mod shelf_section;

pub use book_tile::BookTile;
pub use bookshelf::BookshelfView;
pub use helpers::{ErrorDisplay, LoadingIndicator, PageContainer, UNAVAILABLE_MESSAGE};
pub use shelf_section::ShelfSectionView;
