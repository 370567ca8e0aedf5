//! Authentication extractor
//!
//! Extracts and validates bearer session tokens from the Authorization
//! header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use pantry_common::{AppError, Claims};
use pantry_core::entities::UserProfile;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the session token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Verified session claims
    pub claims: Claims,
}

impl AuthUser {
    /// Identity-provider subject id of the caller
    pub fn user_id(&self) -> &str {
        &self.claims.sub
    }

    /// Profile fields carried in the session token
    pub fn profile(&self) -> UserProfile {
        self.claims.profile()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::MissingAuth))?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .session_service()
            .validate_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid session token");
                ApiError::App(e)
            })?;

        Ok(AuthUser { claims })
    }
}
