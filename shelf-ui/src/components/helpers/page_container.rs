//! Page container component

use dioxus::prelude::*;

/// Centered page wrapper shared by every status
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "page", {children} }
    }
}
