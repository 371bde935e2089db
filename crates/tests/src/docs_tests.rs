use axum::http::{header, StatusCode};
use utoipa::OpenApi;

use crate::common;

#[tokio::test]
async fn docs_page_is_served() {
    let app = common::test_app();

    let response = common::get(&app, "/docs", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let content_type = response
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/html"), "{content_type}");
}

#[test]
fn openapi_document_lists_every_route() {
    let doc = server::openapi::ApiDoc::openapi();
    let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
    for expected in ["/health", "/api/session", "/api/accounts"] {
        assert!(paths.contains(&expected), "{expected} missing from {paths:?}");
    }
}
