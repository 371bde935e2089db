use dioxus::prelude::*;
use shared_types::{session_capabilities, AuthUser, CapabilitySet, LogoutState};

use crate::routes::Route;

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
    pub logout_state: Signal<LogoutState>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            logout_state: Signal::new(LogoutState::Idle),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }

    pub fn is_logout_pending(&self) -> bool {
        self.logout_state.read().is_pending()
    }

    /// Sign out through the server. Calls made while a sign-out is already
    /// in flight are ignored. On success the session is dropped and the
    /// router moves to the login page; on failure the user stays signed in.
    pub fn logout(&self) {
        let mut logout_state = self.logout_state;
        if !logout_state.write().begin() {
            tracing::debug!("logout already pending, ignoring");
            return;
        }

        let mut current_user = self.current_user;
        spawn(async move {
            match server::api::logout().await {
                Ok(()) => {
                    current_user.set(None);
                    navigator().push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "logout failed");
                }
            }
            logout_state.write().settle();
        });
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Capabilities granted to the current session. Empty when signed out.
pub fn use_capabilities() -> CapabilitySet {
    let auth = use_auth();
    let user = auth.current_user.read();
    session_capabilities(user.as_ref())
}
