use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::auth::service::JwtKeys;
use crate::error::ApiError;

/// Extracts and validates the bearer token, yielding the session identity.
/// Applied as an argument to every protected handler.
#[derive(Debug)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);

        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ApiError::MissingCredential("Missing Authorization header".to_string())
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or_else(|| {
                ApiError::MissingCredential("Invalid Authorization header".to_string())
            })?;

        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::InvalidToken("Invalid or expired token".to_string())
        })?;

        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
        })
    }
}
