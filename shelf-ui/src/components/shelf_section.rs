//! Shelf section component

use crate::components::book_tile::BookTile;
use dioxus::prelude::*;
use shelf_common::{Book, Shelf};

/// One labeled shelf: heading with the book count, then the covers in the
/// order they were received.
#[component]
pub fn ShelfSectionView(shelf: Shelf, books: Vec<Book>, year: i32) -> Element {
    let heading = shelf.heading(books.len(), year);
    let slug = shelf.slug();

    rsx! {
        section { id: "{slug}", class: "shelf",
            h2 { "{heading}" }
            div { class: "shelf-books",
                for (idx, book) in books.iter().enumerate() {
                    BookTile { key: "{idx}", book: book.clone() }
                }
            }
        }
    }
}
