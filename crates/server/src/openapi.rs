use axum::Router;
use shared_types::{AppError, AppErrorKind, AuthUser, LoginRequest, MessageResponse, SessionResponse};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{health, rest};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        rest::accounts::list_accounts,
        rest::session::get_session,
        rest::session::create_session,
        rest::session::delete_session,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        AuthUser,
        LoginRequest,
        MessageResponse,
        SessionResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "session", description = "Sign-in and sign-out endpoints"),
        (name = "accounts", description = "Account directory endpoints"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "SecureDash API",
        description = "Session API for the SecureDash dashboard",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`,
/// the health check at `/health` and the REST API at `/api/*`.
pub fn api_router() -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}

/// [`api_router`] wrapped in the session middleware and request-id layers,
/// the same stack the app server puts in front of every request.
pub fn service_router() -> Router {
    with_service_layers(api_router())
}

/// Apply the session middleware and request-id layers to `router`.
pub fn with_service_layers(router: Router) -> Router {
    router
        .layer(axum::middleware::from_fn(
            crate::auth::middleware::session_middleware,
        ))
        .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
        .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
            tower_http::request_id::MakeRequestUuid,
        ))
}
