//! Axum extractor for validated request bodies
//!
//! This module provides the `ValidatedJson<T>` extractor that parses and
//! validates request payloads before they reach handlers.

use super::ValidatedPayload;
use crate::core::error::{AppError, RequestError, ValidationError};
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

/// Axum extractor that parses and validates a JSON body
///
/// - a `null` or empty body is a bad request naming the payload
/// - malformed JSON, or JSON of the wrong shape, is a bad request
/// - a well-formed payload breaking its rules is unprocessable (422)
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_company(
///     ValidatedJson(payload): ValidatedJson<CompanyForManipulationDto>,
/// ) -> AppResult<Json<CompanyDto>> {
///     // payload already passed its rules
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
    T: ValidatedPayload,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let null_payload = || {
            AppError::Request(RequestError::NullPayload {
                subject: T::subject().to_string(),
            })
        };

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::Request(RequestError::InvalidBody {
                    message: rejection.body_text(),
                })
            })?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(null_payload());
        }

        let value: Value = serde_json::from_slice(&body)?;
        if value.is_null() {
            return Err(null_payload());
        }

        let payload: T = serde_json::from_value(value)?;

        let errors = payload.field_errors();
        if !errors.is_empty() {
            return Err(AppError::Validation(ValidationError::FieldErrors(errors)));
        }

        Ok(ValidatedJson(payload))
    }
}
