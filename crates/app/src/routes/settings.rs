use dioxus::prelude::*;
use shared_types::FeatureFlags;

use super::placeholder::PagePlaceholder;

/// Read-only view of the server's feature flags.
#[component]
pub fn Settings() -> Element {
    let flags: FeatureFlags = use_context();
    let telemetry = if flags.telemetry { "enabled" } else { "disabled" };

    rsx! {
        PagePlaceholder {
            title: "Settings",
            description: "Workspace preferences.",
            p { class: "page-empty", "Trace export is {telemetry}." }
        }
    }
}
