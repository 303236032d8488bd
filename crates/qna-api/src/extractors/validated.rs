//! JSON body extraction with field validation
//!
//! Request DTOs carry `validator` derive rules (title/description/tag
//! bounds and the like). This extractor runs them at the boundary, so
//! handlers only ever see well-formed input.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// A JSON request body that passed its validation rules
///
/// Deserialization failures map to `INVALID_REQUEST_BODY`; rule
/// violations map to `VALIDATION_ERROR` with per-field details.
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
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?;

        body.validate()?;

        Ok(ValidatedJson(body))
    }
}
