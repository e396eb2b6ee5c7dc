pub mod api;
pub mod config;
pub mod pages;

use config::ShelfConfig;
use dioxus::prelude::*;
use pages::Bookshelf;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(ShelfConfig::from_build_env);

    rsx! {
        document::Title { "Bookshelf" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Bookshelf {}
    }
}
