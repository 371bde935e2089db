use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn health_reports_ok() {
    let app = common::test_app();

    let response = common::get(&app, "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["active_sessions"].is_u64());
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = common::test_app();

    let response = common::get(&app, "/health", None).await;
    let id = response
        .headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(!id.is_empty(), "missing x-request-id");
}
