use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn listing_requires_a_session() {
    let app = common::test_app();

    let response = common::get(&app, "/api/accounts", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn members_are_forbidden() {
    let app = common::test_app();
    let cookie = common::sign_in(&app, "al").await;

    let response = common::get(&app, "/api/accounts", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.json()["kind"], "Forbidden");
}

#[tokio::test]
async fn admins_see_the_directory_in_order() {
    let app = common::test_app();
    let cookie = common::sign_in(&app, "admin1").await;

    let response = common::get(&app, "/api/accounts", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!([
            { "id": 1, "username": "admin1", "role": "admin" },
            { "id": 2, "username": "al", "role": "user" }
        ])
    );
}
