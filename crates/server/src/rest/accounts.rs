use axum::Json;
use shared_types::{AppError, AuthUser, Capability};

use crate::auth::{directory_accounts, extractors::AuthRequired, require_capability};

/// List directory accounts. Admin only.
#[utoipa::path(
    get,
    path = "/api/accounts",
    responses(
        (status = 200, description = "Directory accounts", body = Vec<AuthUser>),
        (status = 401, description = "Not signed in", body = AppError),
        (status = 403, description = "Admin role required", body = AppError)
    ),
    tag = "accounts"
)]
pub async fn list_accounts(AuthRequired(user): AuthRequired) -> Result<Json<Vec<AuthUser>>, AppError> {
    require_capability(&user, Capability::ManageUsers)?;
    Ok(Json(directory_accounts()))
}
