use dioxus::prelude::*;

use super::placeholder::PagePlaceholder;

#[component]
pub fn BehaviorAnalysis() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Behavior Analysis",
            description: "Deviations from each account's usual activity.",
            p { class: "page-empty", "No behavior baselines available." }
        }
    }
}
