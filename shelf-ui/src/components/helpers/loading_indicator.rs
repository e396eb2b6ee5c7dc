//! Loading indicator component

use dioxus::prelude::*;

/// Full-height loading text. The trailing ellipsis is animated by the
/// `loading` class in the stylesheet (four steps, 900ms cycle).
#[component]
pub fn LoadingIndicator(
    /// Text before the animated ellipsis (default: "Loading")
    #[props(default = "Loading".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "status-message loading", role: "status", "{message}" }
    }
}
