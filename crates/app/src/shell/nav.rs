use dioxus::prelude::*;
use shared_types::{Highlight, NavEntry};
use shared_ui::{SidebarMenu, SidebarMenuItem};

use super::icons::NavGlyph;

/// CSS classes for a navigation link in the given state.
pub fn nav_link_class(highlight: Highlight) -> &'static str {
    match highlight {
        Highlight::Active => "shell-nav-link shell-nav-link-active",
        Highlight::Inactive => "shell-nav-link",
    }
}

/// The navigation list. Rendered by both the desktop sidebar and the
/// mobile overlay from the same entries.
#[component]
pub fn NavMenu(
    entries: Vec<NavEntry>,
    /// Called after any entry is activated.
    #[props(default)]
    on_navigate: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        SidebarMenu {
            for entry in entries {
                SidebarMenuItem {
                    key: "{entry.item.path}",
                    active: entry.highlight.is_active(),
                    Link {
                        to: entry.item.path,
                        class: nav_link_class(entry.highlight),
                        onclick: move |_| {
                            if let Some(handler) = on_navigate {
                                handler.call(());
                            }
                        },
                        NavGlyph { icon: entry.item.icon }
                        span { "{entry.item.label}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_link_gets_extra_class() {
        assert_eq!(
            nav_link_class(Highlight::Active),
            "shell-nav-link shell-nav-link-active"
        );
        assert_eq!(nav_link_class(Highlight::Inactive), "shell-nav-link");
    }
}
