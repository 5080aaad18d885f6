use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::security::token::{Claims, TokenService};

/// Caller identity taken from a valid `Authorization: Bearer <token>` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<TokenService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApplicationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let tokens = Arc::<TokenService>::from_ref(state);
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApplicationError::Unauthorized("Authentication failed.".into()))?;
        let claims = tokens.verify(token).map_err(|error| {
            tracing::debug!(%error, "bearer token rejected");
            ApplicationError::Unauthorized("Authentication failed.".into())
        })?;
        Ok(Self(claims))
    }
}
