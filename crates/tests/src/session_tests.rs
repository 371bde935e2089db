use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn anonymous_session_has_no_user() {
    let app = common::test_app();

    let response = common::get(&app, "/api/session", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({}));
}

#[tokio::test]
async fn sign_in_sets_http_only_cookie() {
    let app = common::test_app();

    let body = json!({ "username": "admin1" }).to_string();
    let response = common::send(&app, Method::POST, "/api/session", None, Some(&body)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.json(),
        json!({ "id": 1, "username": "admin1", "role": "admin" })
    );

    let cookie = response.session_set_cookie().expect("session cookie set");
    assert!(cookie.contains("HttpOnly"), "{cookie}");
    assert!(cookie.contains("SameSite=Lax"), "{cookie}");
    assert!(cookie.contains("Path=/"), "{cookie}");
}

#[tokio::test]
async fn sign_in_trims_the_username() {
    let app = common::test_app();

    let body = json!({ "username": "  al  " }).to_string();
    let response = common::send(&app, Method::POST, "/api/session", None, Some(&body)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["username"], "al");
}

#[tokio::test]
async fn unknown_account_is_unauthorized() {
    let app = common::test_app();

    let body = json!({ "username": "mallory" }).to_string();
    let response = common::send(&app, Method::POST, "/api/session", None, Some(&body)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["kind"], "Unauthorized");
    assert!(response.session_set_cookie().is_none());
}

#[tokio::test]
async fn blank_username_fails_validation() {
    let app = common::test_app();

    let body = json!({ "username": "   " }).to_string();
    let response = common::send(&app, Method::POST, "/api/session", None, Some(&body)).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let error = response.json();
    assert_eq!(error["kind"], "ValidationError");
    assert!(error["field_errors"]["username"].is_string());
}

#[tokio::test]
async fn session_cookie_resolves_to_the_user() {
    let app = common::test_app();
    let cookie = common::sign_in(&app, "al").await;

    let response = common::get(&app, "/api/session", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({ "user": { "id": 2, "username": "al", "role": "user" } })
    );
}

#[tokio::test]
async fn sign_out_revokes_the_session() {
    let app = common::test_app();
    let cookie = common::sign_in(&app, "al").await;

    let response = common::send(&app, Method::DELETE, "/api/session", Some(&cookie), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "message": "Signed out" }));
    let cleared = response.session_set_cookie().expect("cookie cleared");
    assert!(cleared.contains("Max-Age=0"), "{cleared}");

    // The old token no longer resolves and the browser is told to drop it.
    let after = common::get(&app, "/api/session", Some(&cookie)).await;
    assert_eq!(after.json(), json!({}));
    let stale = after.session_set_cookie().expect("stale cookie cleared");
    assert!(stale.contains("Max-Age=0"), "{stale}");
}

#[tokio::test]
async fn anonymous_sign_out_still_clears_the_cookie() {
    let app = common::test_app();

    let response = common::send(&app, Method::DELETE, "/api/session", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.session_set_cookie().is_some());
}

#[tokio::test]
async fn forged_cookie_is_treated_as_anonymous() {
    let app = common::test_app();

    let response = common::get(&app, "/api/session", Some("securedash_session=not-a-token")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({}));
}

#[tokio::test]
async fn sign_in_over_a_stale_cookie_keeps_the_new_session() {
    let app = common::test_app();

    let body = json!({ "username": "al" }).to_string();
    let response = common::send(
        &app,
        Method::POST,
        "/api/session",
        Some("securedash_session=bogus"),
        Some(&body),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let cookies = response.session_set_cookies();
    assert_eq!(cookies.len(), 1, "{cookies:?}");
    assert!(!cookies[0].contains("Max-Age=0"), "{cookies:?}");

    let cookie = response.session_cookie_pair();
    let after = common::get(&app, "/api/session", Some(&cookie)).await;
    assert_eq!(after.json()["user"]["username"], "al");
}

#[tokio::test]
async fn sign_out_over_a_stale_cookie_clears_once() {
    let app = common::test_app();

    let response = common::send(
        &app,
        Method::DELETE,
        "/api/session",
        Some("securedash_session=bogus"),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    let cookies = response.session_set_cookies();
    assert_eq!(cookies.len(), 1, "{cookies:?}");
    assert!(cookies[0].contains("Max-Age=0"), "{cookies:?}");
}
