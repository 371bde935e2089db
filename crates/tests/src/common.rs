use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use shared_types::{AccountEntry, AppConfig, FeatureFlags};
use tower::ServiceExt;

fn fixture_config() -> AppConfig {
    AppConfig {
        features: FeatureFlags::default(),
        accounts: vec![
            AccountEntry {
                username: "admin1".into(),
                role: "admin".into(),
            },
            AccountEntry {
                username: "al".into(),
                role: "user".into(),
            },
        ],
    }
}

/// The REST router behind the same session middleware and request-id
/// layers the app server uses, with the fixture account directory.
///
/// The configuration is process-global, so every test installs the same
/// fixture and only the first install takes effect.
pub fn test_app() -> Router {
    let _ = server::config::install_config(fixture_config());
    server::openapi::service_router()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Every `Set-Cookie` value for the session cookie, in header order.
    pub fn session_set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter(|v| v.starts_with("securedash_session="))
            .map(str::to_string)
            .collect()
    }

    /// The `Set-Cookie` value for the session cookie, if any. Browsers apply
    /// the last one, so that is the one returned.
    pub fn session_set_cookie(&self) -> Option<String> {
        self.session_set_cookies().pop()
    }

    /// `name=value` pair to send back in a `Cookie` header.
    pub fn session_cookie_pair(&self) -> String {
        let set_cookie = self
            .session_set_cookie()
            .expect("response should set the session cookie");
        set_cookie
            .split(';')
            .next()
            .expect("cookie has a name=value pair")
            .to_string()
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    send(app, Method::GET, uri, cookie, None).await
}

/// Sign in through `POST /api/session` and return the cookie pair.
pub async fn sign_in(app: &Router, username: &str) -> String {
    let body = serde_json::json!({ "username": username }).to_string();
    let response = send(app, Method::POST, "/api/session", None, Some(&body)).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text());
    response.session_cookie_pair()
}
