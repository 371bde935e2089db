use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::extractors::{SessionToken, SessionUser};
use super::session;

/// Permissive session middleware.
///
/// On each request:
/// 1. Resolves the session cookie against the session store
/// 2. Inserts `SessionUser` / `SessionToken` for downstream handlers
/// 3. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 4. After the handler runs, applies any pending cookie action to the response,
///    or clears a stale cookie unless the handler set the cookie itself
///
/// Does NOT reject anonymous requests; handlers decide authorization.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let token = cookies::extract_session_token(req.headers());
    let mut stale_cookie = false;

    if let Some(token) = token {
        match session::store().resolve(&token) {
            Some(user) => {
                req.extensions_mut().insert(SessionUser(user));
                req.extensions_mut().insert(SessionToken(token));
            }
            None => stale_cookie = true,
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    match cookie_slot.take() {
        Some(PendingCookieAction::Set { token }) => {
            cookies::set_session_cookie(response.headers_mut(), &token);
        }
        Some(PendingCookieAction::Clear) => {
            cookies::clear_session_cookie(response.headers_mut());
        }
        // Leave the cookie alone if the handler already wrote it.
        None if stale_cookie && !cookies::sets_session_cookie(response.headers()) => {
            cookies::clear_session_cookie(response.headers_mut());
        }
        None => {}
    }

    response
}
