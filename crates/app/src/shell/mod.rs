//! The dashboard shell: desktop sidebar, mobile navigation overlay, top bar
//! and the content slot every authenticated page renders into.

mod header;
mod icons;
mod nav;
mod session_panel;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;
use shared_types::{nav_entries, MobileMenuEvent, MobileMenuState, BRAND_NAME};
use shared_ui::{
    Sheet, SheetClose, SheetHeader, SheetSide, Sidebar, SidebarContent, SidebarFooter,
    SidebarHeader, SidebarInset,
};

use crate::auth::use_auth;
use crate::routes::Route;

use header::TopBar;
use nav::NavMenu;
use session_panel::SessionPanel;

/// Layout wrapping every page behind the auth guard.
///
/// Owns only the mobile overlay flag; the session, the current path and the
/// toast queue come from their respective providers.
#[component]
pub fn DashboardShell() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let current_path = route.to_string();

    let mut mobile_menu = use_signal(MobileMenuState::default);
    let dispatch = use_callback(move |event: MobileMenuEvent| {
        let next = mobile_menu().apply(event);
        tracing::debug!(?event, ?next, "mobile menu transition");
        mobile_menu.set(next);
    });

    let user = auth.current_user.read().clone();
    let entries = nav_entries(user.as_ref(), &current_path);
    let logout_pending = auth.is_logout_pending();
    let on_logout = move |_: ()| auth.logout();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "shell",
            Sidebar {
                SidebarHeader {
                    span { class: "shell-brand", "{BRAND_NAME}" }
                }
                SidebarContent {
                    NavMenu { entries: entries.clone() }
                }
                if let Some(user) = user.clone() {
                    SidebarFooter {
                        SessionPanel { user, logout_pending, on_logout }
                    }
                }
            }

            Sheet {
                open: mobile_menu().is_open(),
                side: SheetSide::Left,
                on_close: move |_| dispatch.call(MobileMenuEvent::Close),
                class: "shell-mobile-nav",
                SheetHeader {
                    span { class: "shell-brand", "{BRAND_NAME}" }
                    SheetClose { on_close: move |_| dispatch.call(MobileMenuEvent::Close),
                        Icon::<LdX> { icon: LdX, width: 18, height: 18 }
                    }
                }
                nav { class: "shell-mobile-nav-list",
                    NavMenu {
                        entries,
                        on_navigate: move |_| dispatch.call(MobileMenuEvent::Navigate),
                    }
                }
                if let Some(user) = user.clone() {
                    div { class: "shell-mobile-nav-footer",
                        SessionPanel { user, logout_pending, on_logout }
                    }
                }
            }

            SidebarInset {
                TopBar {
                    user,
                    logout_pending,
                    on_open_menu: move |_| dispatch.call(MobileMenuEvent::Open),
                    on_logout,
                }
                main { class: "shell-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
