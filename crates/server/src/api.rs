use dioxus::prelude::*;
use shared_types::{AuthUser, FeatureFlags};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

// ── Session helpers for server functions ──────────────────

/// Token and user of the caller's session, if any.
/// Checks middleware-injected extensions first, falls back to cookie parsing.
#[cfg(feature = "server")]
fn current_session() -> Option<(String, AuthUser)> {
    use crate::auth::{
        cookies,
        extractors::{SessionToken, SessionUser},
        session,
    };

    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    // Primary: resolved by the session middleware
    if let (Some(token), Some(user)) = (
        parts.extensions.get::<SessionToken>(),
        parts.extensions.get::<SessionUser>(),
    ) {
        return Some((token.0.clone(), user.0.clone()));
    }

    // Fallback: the middleware did not run for this request
    let token = cookies::extract_session_token(&parts.headers)?;
    let user = session::store().resolve(&token)?;
    Some((token, user))
}

/// Get the current feature flags. No auth required; flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// The signed-in user, or `None` for anonymous callers.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    Ok(current_session().map(|(_, user)| user))
}

/// Open a session for a directory account and set the session cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn login(username: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, lookup_account, session};
    use shared_types::{AppError, LoginRequest};

    let req = LoginRequest {
        username: username.trim().to_string(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let user = match lookup_account(&req.username) {
        Some(user) => user,
        None => {
            tracing::warn!(username = %req.username, "sign-in rejected: unknown account");
            return Err(AppError::unauthorized("Unknown account").into_server_fn_error());
        }
    };

    let token = session::store().create(user.clone());
    cookies::schedule_session_cookie(&token);
    tracing::info!(user_id = user.id, username = %user.username, role = %user.role, "session created");

    Ok(user)
}

/// Every account in the directory. Requires the `ManageUsers` capability.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_accounts() -> Result<Vec<AuthUser>, ServerFnError> {
    use crate::auth::{directory_accounts, require_capability};
    use shared_types::{AppError, Capability};

    let (_, user) = current_session().ok_or_else(|| {
        AppError::unauthorized("Authentication required").into_server_fn_error()
    })?;
    require_capability(&user, Capability::ManageUsers).map_err(|e| e.into_server_fn_error())?;

    Ok(directory_accounts())
}

/// End the caller's session, if any, and clear the session cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::{cookies, session};

    if let Some((token, user)) = current_session() {
        session::store().revoke(&token);
        tracing::info!(user_id = user.id, username = %user.username, "session revoked");
    }

    cookies::schedule_clear_cookie();

    Ok(())
}
