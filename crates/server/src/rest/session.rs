use axum::{
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use shared_types::{AppError, AuthUser, LoginRequest, MessageResponse, SessionResponse};

use crate::auth::{
    cookies,
    extractors::{MaybeAuth, MaybeToken},
    lookup_account, session,
};
use crate::error_convert::ValidateRequest;

// ---------------------------------------------------------------------------
// GET /api/session
// ---------------------------------------------------------------------------

/// The caller's session, if any.
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Current session (user omitted when anonymous)", body = SessionResponse)
    ),
    tag = "session"
)]
pub async fn get_session(MaybeAuth(user): MaybeAuth) -> Json<SessionResponse> {
    Json(SessionResponse { user })
}

// ---------------------------------------------------------------------------
// POST /api/session
// ---------------------------------------------------------------------------

/// Sign in as a directory account. Sets the session cookie.
#[utoipa::path(
    post,
    path = "/api/session",
    request_body = LoginRequest,
    responses(
        (status = 201, description = "Session created", body = AuthUser),
        (status = 401, description = "Unknown account", body = AppError),
        (status = 422, description = "Validation error", body = AppError)
    ),
    tag = "session"
)]
pub async fn create_session(
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let req = LoginRequest {
        username: body.username.trim().to_string(),
    };
    req.validate_request()?;

    let user = lookup_account(&req.username).ok_or_else(|| {
        tracing::warn!(username = %req.username, "sign-in rejected: unknown account");
        AppError::unauthorized("Unknown account")
    })?;

    let token = session::store().create(user.clone());
    tracing::info!(user_id = user.id, username = %user.username, role = %user.role, "session created");

    let mut headers = HeaderMap::new();
    cookies::set_session_cookie(&mut headers, &token);
    Ok((StatusCode::CREATED, headers, Json(user)))
}

// ---------------------------------------------------------------------------
// DELETE /api/session
// ---------------------------------------------------------------------------

/// Sign out. Always clears the session cookie, even for anonymous callers.
#[utoipa::path(
    delete,
    path = "/api/session",
    responses(
        (status = 200, description = "Signed out", body = MessageResponse)
    ),
    tag = "session"
)]
pub async fn delete_session(MaybeToken(token): MaybeToken) -> impl IntoResponse {
    if let Some(token) = token {
        if session::store().revoke(&token) {
            tracing::info!("session revoked");
        }
    }

    let mut headers = HeaderMap::new();
    cookies::clear_session_cookie(&mut headers);
    (
        headers,
        Json(MessageResponse {
            message: "Signed out".to_string(),
        }),
    )
}
