use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdLayoutDashboard, LdSettings, LdShield, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::NavIcon;

const NAV_ICON_SIZE: u32 = 18;

/// Lucide glyph for a navigation entry.
#[component]
pub fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: NAV_ICON_SIZE, height: NAV_ICON_SIZE }
        },
        NavIcon::ShieldAlert => rsx! {
            Icon::<LdShield> { icon: LdShield, width: NAV_ICON_SIZE, height: NAV_ICON_SIZE }
        },
        NavIcon::Activity => rsx! {
            Icon::<LdActivity> { icon: LdActivity, width: NAV_ICON_SIZE, height: NAV_ICON_SIZE }
        },
        NavIcon::BarChart => rsx! {
            Icon::<LdTrendingUp> { icon: LdTrendingUp, width: NAV_ICON_SIZE, height: NAV_ICON_SIZE }
        },
        NavIcon::Users => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: NAV_ICON_SIZE, height: NAV_ICON_SIZE }
        },
        NavIcon::Settings => rsx! {
            Icon::<LdSettings> { icon: LdSettings, width: NAV_ICON_SIZE, height: NAV_ICON_SIZE }
        },
    }
}
