use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_types::AuthUser;
use shared_ui::{Button, ButtonVariant, InitialsAvatar};

/// Avatar, username and role of the signed-in user.
#[component]
pub fn SessionIdentity(user: AuthUser) -> Element {
    rsx! {
        div { class: "shell-identity",
            InitialsAvatar { initials: user.initials() }
            div { class: "shell-identity-text",
                span { class: "shell-identity-name", "{user.username}" }
                span { class: "shell-identity-role", "{user.role_label()}" }
            }
        }
    }
}

/// Identity block plus a logout button, shown at the bottom of both
/// navigation surfaces.
#[component]
pub fn SessionPanel(user: AuthUser, logout_pending: bool, on_logout: EventHandler<()>) -> Element {
    rsx! {
        div { class: "shell-session",
            SessionIdentity { user }
            Button {
                variant: ButtonVariant::Outline,
                disabled: logout_pending,
                class: "shell-logout",
                onclick: move |_| on_logout.call(()),
                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                if logout_pending { "Logging out..." } else { "Log out" }
            }
        }
    }
}
