//! Validated JSON extractor
//!
//! Extracts and validates JSON request bodies using the validator crate.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use pantry_common::AppError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Validated JSON extractor
///
/// Extracts a JSON body and validates it using the `validator` crate.
/// The inner type must implement both `Deserialize` and `Validate`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // A body that cannot be read or deserialized is a bad request on the
        // body, not the query string
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::App(AppError::InvalidInput(e.to_string())))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
