//! Session middleware behavior, driven through a bare axum router.
//!
//! Run with: `cargo test -p server --features server --test middleware_tests`

#![cfg(feature = "server")]

use axum::{
    body::Body,
    extract::Extension,
    http::{header, Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use server::auth::{
    cookies::{CookieSlot, PendingCookieAction, SESSION_COOKIE},
    extractors::{AuthRequired, MaybeAuth},
    middleware::session_middleware,
    session,
};
use shared_types::AuthUser;
use tower::ServiceExt;

async fn schedule_set(Extension(slot): Extension<CookieSlot>) -> &'static str {
    slot.put(PendingCookieAction::Set {
        token: "scheduled-token".into(),
    });
    "ok"
}

async fn schedule_clear(Extension(slot): Extension<CookieSlot>) -> &'static str {
    slot.put(PendingCookieAction::Clear);
    "ok"
}

async fn write_directly() -> axum::http::HeaderMap {
    let mut headers = axum::http::HeaderMap::new();
    server::auth::cookies::set_session_cookie(&mut headers, "handler-token");
    headers
}

async fn whoami(MaybeAuth(user): MaybeAuth) -> String {
    user.map(|u| u.username).unwrap_or_else(|| "anonymous".into())
}

async fn private(AuthRequired(user): AuthRequired) -> String {
    user.username
}

fn app() -> Router {
    Router::new()
        .route("/set", get(schedule_set))
        .route("/clear", get(schedule_clear))
        .route("/direct", get(write_directly))
        .route("/whoami", get(whoami))
        .route("/private", get(private))
        .layer(middleware::from_fn(session_middleware))
}

async fn call(uri: &str, cookie: Option<&str>) -> (StatusCode, Vec<String>, String) {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let response = app()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let set_cookies = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, set_cookies, String::from_utf8_lossy(&body).into_owned())
}

fn live_cookie(username: &str) -> String {
    let token = session::store().create(AuthUser {
        id: 99,
        username: username.into(),
        role: "user".into(),
    });
    format!("{SESSION_COOKIE}={token}")
}

#[tokio::test]
async fn scheduled_set_is_applied_to_response() {
    let (status, cookies, _) = call("/set", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("securedash_session=scheduled-token"), "{cookies:?}");
}

#[tokio::test]
async fn scheduled_clear_expires_cookie() {
    let (_, cookies, _) = call("/clear", None).await;
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].contains("Max-Age=0"), "{cookies:?}");
}

#[tokio::test]
async fn live_cookie_resolves_user_without_touching_cookie() {
    let cookie = live_cookie("middleware-user");
    let (status, cookies, body) = call("/whoami", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "middleware-user");
    assert!(cookies.is_empty(), "{cookies:?}");
}

#[tokio::test]
async fn unknown_token_is_anonymous_and_cleared() {
    let (_, cookies, body) = call("/whoami", Some("securedash_session=bogus")).await;
    assert_eq!(body, "anonymous");
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].contains("Max-Age=0"), "{cookies:?}");
}

#[tokio::test]
async fn no_cookie_means_no_set_cookie() {
    let (_, cookies, body) = call("/whoami", None).await;
    assert_eq!(body, "anonymous");
    assert!(cookies.is_empty());
}

#[tokio::test]
async fn auth_required_rejects_anonymous() {
    let (status, _, _) = call("/private", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let cookie = live_cookie("private-user");
    let (status, _, body) = call("/private", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "private-user");
}

#[tokio::test]
async fn handler_written_cookie_survives_stale_token() {
    let (_, cookies, _) = call("/direct", Some("securedash_session=bogus")).await;
    assert_eq!(cookies.len(), 1, "{cookies:?}");
    assert!(cookies[0].starts_with("securedash_session=handler-token"), "{cookies:?}");
}
