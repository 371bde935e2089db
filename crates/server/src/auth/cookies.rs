use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex, PoisonError};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "securedash_session";

fn header_value(cookie: Cookie<'_>) -> Option<HeaderValue> {
    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// Build a Set-Cookie value holding the session token.
pub fn build_session_cookie(token: &str, max_age_minutes: i64, secure: bool) -> Option<HeaderValue> {
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::minutes(max_age_minutes))
        .secure(secure)
        .build();
    header_value(cookie)
}

/// Build a Set-Cookie value that expires the session cookie.
pub fn build_clear_cookie() -> Option<HeaderValue> {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();
    header_value(cookie)
}

/// Read the session token from the Cookie header(s).
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == SESSION_COOKIE && !c.value().is_empty())
        .map(|c| c.value().to_string())
}

/// Whether `headers` already carry a `Set-Cookie` for the session cookie.
pub fn sets_session_cookie(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.starts_with(&format!("{SESSION_COOKIE}=")))
}

/// Attach the session cookie to a response using the configured TTL.
pub fn set_session_cookie(headers: &mut HeaderMap, token: &str) {
    let ttl = super::session::store().ttl_minutes();
    if let Some(value) = build_session_cookie(token, ttl, crate::config::cookie_secure()) {
        headers.append(header::SET_COOKIE, value);
    }
}

pub fn clear_session_cookie(headers: &mut HeaderMap) {
    if let Some(value) = build_clear_cookie() {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Cookie change requested by a server function, applied by the middleware
/// once the response is built.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set { token: String },
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the middleware.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn put(&self, action: PendingCookieAction) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(action);
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.put(action);
        }
    }
}

/// Schedule the session cookie to be set by the middleware.
pub fn schedule_session_cookie(token: &str) {
    schedule(PendingCookieAction::Set {
        token: token.to_string(),
    });
}

/// Schedule the session cookie to be cleared by the middleware.
pub fn schedule_clear_cookie() {
    schedule(PendingCookieAction::Clear);
}
