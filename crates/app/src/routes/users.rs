use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, Capability};
use shared_ui::{Badge, BadgeVariant, InitialsAvatar};

use super::placeholder::PagePlaceholder;
use crate::auth::use_capabilities;

fn role_badge_variant(user: &AuthUser) -> BadgeVariant {
    if user.is_admin() {
        BadgeVariant::Primary
    } else {
        BadgeVariant::Secondary
    }
}

/// Account directory. The nav entry is hidden from non-admins, but the
/// path is still reachable by URL, so access is checked here as well.
#[component]
pub fn Users() -> Element {
    let granted = use_capabilities();

    if !granted.contains(Capability::ManageUsers) {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./page.css") }
            div { class: "page",
                h1 { class: "page-title", "Users" }
                div { class: "page-notice", role: "alert",
                    "You do not have permission to manage users."
                }
            }
        };
    }

    rsx! {
        PagePlaceholder {
            title: "Users",
            description: "Accounts in the directory.",
            AccountDirectory {}
        }
    }
}

#[component]
fn AccountDirectory() -> Element {
    let accounts = use_resource(move || async move { server::api::list_accounts().await });

    match &*accounts.read() {
        None => rsx! { p { class: "page-empty", "Loading accounts..." } },
        Some(Err(e)) => {
            let message = AppError::friendly_message(&e.to_string());
            rsx! { div { class: "page-notice", role: "alert", "{message}" } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "page-empty", "No accounts are configured." }
        },
        Some(Ok(list)) => rsx! { AccountTable { accounts: list.clone() } },
    }
}

#[component]
fn AccountTable(accounts: Vec<AuthUser>) -> Element {
    rsx! {
        table { class: "account-table",
            thead {
                tr {
                    th { "" }
                    th { "Username" }
                    th { "Role" }
                }
            }
            tbody {
                for account in accounts {
                    tr { key: "{account.id}",
                        td { InitialsAvatar { initials: account.initials() } }
                        td { "{account.username}" }
                        td {
                            Badge { variant: role_badge_variant(&account), "{account.role_label()}" }
                        }
                    }
                }
            }
        }
    }
}
