use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdLogOut, LdMenu, LdSettings, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{AccountAction, AccountOutcome, AuthUser, ACCOUNT_MENU_LABEL, BRAND_NAME};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, DropdownMenu, DropdownMenuContent,
    DropdownMenuItem, DropdownMenuLabel, DropdownMenuSeparator, DropdownMenuTrigger,
    InitialsAvatar, Separator,
};

use crate::notify;

/// Top bar above the content slot: hamburger, brand and account menu on
/// small screens, notification bell everywhere. The account menu needs a
/// session.
#[component]
pub fn TopBar(
    user: Option<AuthUser>,
    logout_pending: bool,
    on_open_menu: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        header { class: "shell-header",
            div { class: "shell-header-mobile",
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    aria_label: "Open menu",
                    onclick: move |_| on_open_menu.call(()),
                    Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                }
                span { class: "shell-brand", "{BRAND_NAME}" }
            }

            div { class: "shell-header-spacer" }

            div { class: "shell-header-actions",
                // No action behind the bell yet; the dot is always shown.
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    aria_label: "Notifications",
                    class: "shell-bell",
                    Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                    span { class: "shell-bell-dot" }
                }

                Separator { horizontal: false }

                // Small screens only; the sidebar footer covers larger ones.
                if let Some(user) = user {
                    div { class: "shell-account-menu",
                        AccountMenu { user, logout_pending, on_logout }
                    }
                }
            }
        }
    }
}

#[component]
fn AccountMenu(user: AuthUser, logout_pending: bool, on_logout: EventHandler<()>) -> Element {
    let toast = use_toast();

    let on_select = use_callback(move |action: AccountAction| {
        if !action.is_enabled(logout_pending) {
            tracing::debug!(?action, "ignoring disabled account menu entry");
            return;
        }
        tracing::debug!(?action, "account menu selection");
        match action.outcome() {
            AccountOutcome::Notify(notice) => notify::show(&toast, &notice),
            AccountOutcome::Logout => on_logout.call(()),
        }
    });

    rsx! {
        DropdownMenu {
            DropdownMenuTrigger {
                aria_label: "Account menu",
                InitialsAvatar { initials: user.initials() }
                span { class: "shell-account-name", "{user.username}" }
            }
            DropdownMenuContent {
                DropdownMenuLabel { "{ACCOUNT_MENU_LABEL}" }
                DropdownMenuSeparator {}
                DropdownMenuItem::<AccountAction> {
                    value: AccountAction::Profile,
                    index: 0usize,
                    on_select,
                    Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                    "{AccountAction::Profile.label()}"
                }
                DropdownMenuItem::<AccountAction> {
                    value: AccountAction::Settings,
                    index: 1usize,
                    on_select,
                    Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                    "{AccountAction::Settings.label()}"
                }
                DropdownMenuSeparator {}
                DropdownMenuItem::<AccountAction> {
                    value: AccountAction::Logout,
                    index: 2usize,
                    disabled: !AccountAction::Logout.is_enabled(logout_pending),
                    on_select,
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "{AccountAction::Logout.label()}"
                }
            }
        }
    }
}
