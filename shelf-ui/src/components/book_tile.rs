//! Book tile component - cover art linking out, finished date on hover

use dioxus::prelude::*;
use shelf_common::Book;

/// A single book cover linking to the book's page in a new tab.
///
/// The link carries `noopener noreferrer`, so the opened page gets no handle
/// back to this window. The "Finished:" overlay is only rendered when the
/// book has a read date; the stylesheet reveals it on hover and focus.
#[component]
pub fn BookTile(book: Book) -> Element {
    let Book {
        url,
        cover_src,
        read_date,
        ..
    } = book;

    rsx! {
        div { class: "book-tile", "data-testid": "book-tile",
            a {
                href: "{url}",
                target: "_blank",
                rel: "noopener noreferrer",
                img { src: "{cover_src}", alt: "" }
                if let Some(date) = read_date {
                    p { class: "read-date",
                        "Finished:"
                        br {}
                        "{date}"
                    }
                }
            }
        }
    }
}
