use dioxus::prelude::*;

use super::placeholder::PagePlaceholder;

#[component]
pub fn Analytics() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Analytics",
            description: "Trends across events and sessions.",
            p { class: "page-empty", "Not enough data to chart yet." }
        }
    }
}
