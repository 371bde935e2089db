use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::{AppError, AuthUser};

/// The signed-in user, inserted into request extensions by the session middleware.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser(pub AuthUser);

/// The raw token of the request's session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionToken(pub String);

/// Extractor that requires a session. Returns 401 if there is none.
pub struct AuthRequired(pub AuthUser);

impl<S: Send + Sync> FromRequestParts<S> for AuthRequired {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionUser>()
            .map(|s| AuthRequired(s.0.clone()))
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Extractor that optionally yields the session user. Never fails.
pub struct MaybeAuth(pub Option<AuthUser>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuth(
            parts.extensions.get::<SessionUser>().map(|s| s.0.clone()),
        ))
    }
}

/// Extractor for the session token, if the middleware resolved one. Never fails.
pub struct MaybeToken(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeToken {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeToken(
            parts.extensions.get::<SessionToken>().map(|t| t.0.clone()),
        ))
    }
}
