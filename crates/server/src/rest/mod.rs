pub mod accounts;
pub mod session;

use axum::{routing::get, Router};

/// REST surface under `/api`.
pub fn api_router() -> Router {
    Router::new()
        .route(
            "/api/session",
            get(session::get_session)
                .post(session::create_session)
                .delete(session::delete_session),
        )
        .route("/api/accounts", get(accounts::list_accounts))
}
