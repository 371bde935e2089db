use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Title plus an empty-state card. Used by pages whose content lives
/// outside the shell.
#[component]
pub fn PagePlaceholder(title: String, description: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./page.css") }
        div { class: "page",
            h1 { class: "page-title", "{title}" }
            Card {
                CardHeader {
                    CardTitle { "{title}" }
                    CardDescription { "{description}" }
                }
                CardContent {
                    {children}
                }
            }
        }
    }
}
