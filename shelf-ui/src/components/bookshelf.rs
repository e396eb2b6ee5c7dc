//! Bookshelf view - pure view over the page status

use crate::components::helpers::{ErrorDisplay, LoadingIndicator, PageContainer};
use crate::components::shelf_section::ShelfSectionView;
use dioxus::prelude::*;
use shelf_common::ShelfStatus;

/// Whole page for a given status.
///
/// `year` is the calendar year shown in the "Read so far in" heading; the
/// caller reads the clock so this view stays pure.
#[component]
pub fn BookshelfView(status: ShelfStatus, year: i32) -> Element {
    let body = match &status {
        ShelfStatus::Loading => rsx! {
            LoadingIndicator {}
        },
        ShelfStatus::Error => rsx! {
            ErrorDisplay {}
        },
        ShelfStatus::Loaded(collections) => rsx! {
            for (shelf, books) in collections.sections() {
                ShelfSectionView {
                    key: "{shelf:?}",
                    shelf,
                    books: books.to_vec(),
                    year,
                }
            }
        },
    };

    rsx! {
        PageContainer { {body} }
    }
}
