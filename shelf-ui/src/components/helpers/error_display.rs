//! Error display component

use dioxus::prelude::*;

/// Shown in place of the whole page when the shelf could not be loaded.
pub const UNAVAILABLE_MESSAGE: &str = "Ruh roh, something went wong!";

/// Full-height static error message. No details, no retry.
#[component]
pub fn ErrorDisplay(#[props(default = UNAVAILABLE_MESSAGE.to_string())] message: String) -> Element {
    rsx! {
        div { class: "status-message", role: "alert", "{message}" }
    }
}
