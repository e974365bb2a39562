//! Axum extractor for validated request bodies
//!
//! This module provides the `ValidatedJson<T>` extractor that normalizes and
//! validates request payloads before they reach handlers.

use crate::core::error::{TaskboardError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Payloads that clean up their own fields before validation
///
/// Typical use is trimming strings so that `"   "` fails a length check.
pub trait Normalize {
    fn normalize(self) -> Self;
}

/// Axum extractor that deserializes, normalizes and validates a JSON body
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_task(
///     State(state): State<TaskAppState>,
///     ValidatedJson(input): ValidatedJson<NewTask>,
/// ) -> Result<(StatusCode, Json<Task>), TaskboardError> {
///     // input is already trimmed and validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    /// Get the inner payload
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Normalize + Validate + Send,
{
    type Rejection = TaskboardError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<T> = Json::from_request(req, state).await.map_err(|e| {
            tracing::warn!(error = %e, "rejected request body");
            TaskboardError::Validation(ValidationError::InvalidJson {
                message: e.body_text(),
            })
        })?;

        let payload = payload.normalize();
        payload.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "request body failed validation");
        })?;

        Ok(ValidatedJson(payload))
    }
}
