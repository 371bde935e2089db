/// Heading of the account dropdown.
pub const ACCOUNT_MENU_LABEL: &str = "My Account";

/// Entries of the account dropdown, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Profile,
    Settings,
    Logout,
}

impl AccountAction {
    pub const ALL: [AccountAction; 3] = [
        AccountAction::Profile,
        AccountAction::Settings,
        AccountAction::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccountAction::Profile => "Profile",
            AccountAction::Settings => "Settings",
            AccountAction::Logout => "Log out",
        }
    }

    /// Whether the entry can be selected. Log out is inert while a logout
    /// is already in flight.
    pub fn is_enabled(&self, logout_pending: bool) -> bool {
        match self {
            AccountAction::Logout => !logout_pending,
            AccountAction::Profile | AccountAction::Settings => true,
        }
    }

    /// What selecting the entry does. Profile and Settings only notify.
    pub fn outcome(&self) -> AccountOutcome {
        match self {
            AccountAction::Profile => AccountOutcome::Notify(Notice::new("Profile", "Profile clicked")),
            AccountAction::Settings => {
                AccountOutcome::Notify(Notice::new("Settings", "Settings clicked"))
            }
            AccountAction::Logout => AccountOutcome::Logout,
        }
    }
}

/// A transient notification shown by the toast provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountOutcome {
    Notify(Notice),
    Logout,
}
