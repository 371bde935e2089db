use serde::{Deserialize, Serialize};

use crate::capability::{Capability, CapabilitySet};

/// Role held by the signed-in user, parsed from the raw role string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    Admin,
    #[default]
    Member,
}

impl UserRole {
    /// Parse the raw `role` string. Only the exact string `admin` is an
    /// administrator; every other value, whatever its case, is a member.
    pub fn from_str_or_default(s: &str) -> Self {
        if s == "admin" {
            UserRole::Admin
        } else {
            UserRole::Member
        }
    }

    /// Capabilities granted to this role.
    pub fn capabilities(&self) -> CapabilitySet {
        match self {
            UserRole::Admin => CapabilitySet::from_iter(Capability::ALL.iter().copied()),
            UserRole::Member => CapabilitySet::empty(),
        }
    }
}

/// Authenticated user info (safe to send to client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl AuthUser {
    pub fn user_role(&self) -> UserRole {
        UserRole::from_str_or_default(&self.role)
    }

    pub fn is_admin(&self) -> bool {
        self.user_role() == UserRole::Admin
    }

    pub fn capabilities(&self) -> CapabilitySet {
        self.user_role().capabilities()
    }

    /// Avatar fallback text: the first two characters of the username, uppercased.
    pub fn initials(&self) -> String {
        self.username.chars().take(2).collect::<String>().to_uppercase()
    }

    /// Role as shown under the username, each word capitalized.
    pub fn role_label(&self) -> String {
        self.role
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Capabilities for an optional session. No session grants nothing.
pub fn session_capabilities(session: Option<&AuthUser>) -> CapabilitySet {
    session.map(AuthUser::capabilities).unwrap_or_default()
}

/// Body of `GET /api/session`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

/// Generic acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}
