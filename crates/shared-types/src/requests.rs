use serde::{Deserialize, Serialize};

/// Sign-in request. Only the account name is checked against the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 64, message = "Username must be 1 to 64 characters"))
    )]
    pub username: String,
}
