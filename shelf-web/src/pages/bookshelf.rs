use crate::api;
use crate::config::ShelfConfig;
use dioxus::prelude::*;
use shelf_common::current_year;
use shelf_ui::{use_shelf_status, BookshelfView};

/// The bookshelf page: loads the shelf once on mount and renders it.
#[component]
pub fn Bookshelf() -> Element {
    let config: ShelfConfig = use_context();
    let status = use_shelf_status(move || api::fetch_collections(config.endpoint.clone()));

    rsx! {
        BookshelfView { status, year: current_year() }
    }
}
