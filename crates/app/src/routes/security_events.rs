use dioxus::prelude::*;

use super::placeholder::PagePlaceholder;

#[component]
pub fn SecurityEvents() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Security Events",
            description: "Recent detections and alerts.",
            p { class: "page-empty", "No security events recorded." }
        }
    }
}
