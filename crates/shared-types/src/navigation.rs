//! Navigation model for the dashboard shell.
//!
//! The desktop sidebar and the mobile overlay both render the output of
//! [`nav_entries`], so the two surfaces can never disagree about which
//! entries are shown, in what order, or which one is highlighted.

use crate::capability::{Capability, CapabilitySet};
use crate::models::{session_capabilities, AuthUser};

/// Product name shown in the sidebar, the overlay and the mobile header.
pub const BRAND_NAME: &str = "SecureDash";

/// Glyph shown next to a navigation label. Rendering is up to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    ShieldAlert,
    Activity,
    BarChart,
    Users,
    Settings,
}

/// A static navigation menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
    /// Capabilities a session must hold for the entry to be shown.
    pub required: &'static [Capability],
}

impl NavItem {
    /// Only administrators hold capabilities, so any requirement makes the
    /// entry admin-only.
    pub fn admin_only(&self) -> bool {
        !self.required.is_empty()
    }

    pub fn is_visible_to(&self, granted: &CapabilitySet) -> bool {
        granted.contains_all(self.required)
    }
}

/// Every entry of the main menu, in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        path: "/",
        icon: NavIcon::Home,
        required: &[],
    },
    NavItem {
        label: "Security Events",
        path: "/security-events",
        icon: NavIcon::ShieldAlert,
        required: &[],
    },
    NavItem {
        label: "Behavior Analysis",
        path: "/behavior-analysis",
        icon: NavIcon::Activity,
        required: &[],
    },
    NavItem {
        label: "Analytics",
        path: "/analytics",
        icon: NavIcon::BarChart,
        required: &[],
    },
    NavItem {
        label: "Users",
        path: "/users",
        icon: NavIcon::Users,
        required: &[Capability::ManageUsers],
    },
    NavItem {
        label: "Settings",
        path: "/settings",
        icon: NavIcon::Settings,
        required: &[],
    },
];

/// Keep the entries the session may see, preserving order.
pub fn visible_nav_items<'a>(items: &'a [NavItem], session: Option<&AuthUser>) -> Vec<&'a NavItem> {
    let granted = session_capabilities(session);
    items.iter().filter(|item| item.is_visible_to(&granted)).collect()
}

/// Visual state of a rendered entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Active,
    Inactive,
}

impl Highlight {
    /// Exact string comparison; sub-paths do not highlight their parent.
    pub fn resolve(item_path: &str, current_path: &str) -> Self {
        if item_path == current_path {
            Highlight::Active
        } else {
            Highlight::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Highlight::Active)
    }
}

/// A visible entry paired with its highlight for the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub item: &'static NavItem,
    pub highlight: Highlight,
}

/// Compute the menu both navigation surfaces render.
pub fn nav_entries(session: Option<&AuthUser>, current_path: &str) -> Vec<NavEntry> {
    visible_nav_items(NAV_ITEMS, session)
        .into_iter()
        .map(|item| NavEntry {
            item,
            highlight: Highlight::resolve(item.path, current_path),
        })
        .collect()
}
