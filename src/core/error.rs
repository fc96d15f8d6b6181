//! Typed error handling for the company/employee API
//!
//! Every condition the service layer can raise is a variant of [`AppError`],
//! grouped by category so handlers and tests can match on them precisely:
//!
//! - [`EntityError`]: a requested company or employee does not exist
//! - [`RequestError`]: the request itself is malformed (400)
//! - [`ValidationError`]: a payload failed its declarative rules (422)
//! - [`StorageError`]: the backing store failed
//! - [`ConfigError`]: configuration could not be loaded
//!
//! A single [`IntoResponse`] implementation maps each condition to its HTTP
//! status. Server-side failures are logged and answered with a generic body
//! so internals never leak to the client.
//!
//! # Example
//!
//! ```rust,ignore
//! use company_employees::prelude::*;
//!
//! let company = repo
//!     .get_company(id)
//!     .await?
//!     .ok_or(AppError::Entity(EntityError::NotFound {
//!         entity_type: "company".to_string(),
//!         id,
//!     }))?;
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Result alias used across the service and handler layers
pub type AppResult<T> = Result<T, AppError>;

/// The main error type of the API
#[derive(Debug, Error)]
pub enum AppError {
    /// Entity lookups that came back empty
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Malformed requests
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Payloads rejected by validation rules
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Anything else (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Entity(e) => e.status_code(),
            AppError::Request(e) => e.status_code(),
            AppError::Validation(e) => e.status_code(),
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Entity(e) => e.error_code(),
            AppError::Request(e) => e.error_code(),
            AppError::Validation(e) => e.error_code(),
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error is a server-side failure
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Short label naming the kind of failure, reported on 500 responses
    pub fn type_label(&self) -> &'static str {
        match self {
            AppError::Entity(_) => "EntityError",
            AppError::Request(_) => "RequestError",
            AppError::Validation(_) => "ValidationError",
            AppError::Storage(_) => "StorageError",
            AppError::Config(_) => "ConfigError",
            AppError::Internal(_) => "InternalError",
        }
    }

    /// Convert to an error response
    ///
    /// Internal failures get a generic message; the real cause is only logged.
    pub fn to_response(&self) -> ErrorResponse {
        if self.is_internal() {
            return ErrorResponse {
                code: self.error_code().to_string(),
                message: "Internal Server Error.".to_string(),
                details: Some(serde_json::json!({ "type": self.type_label() })),
            };
        }

        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id.to_string()
                }))
            }
            AppError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_internal() {
            tracing::error!(error = %self, kind = self.type_label(), "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity lookups
#[derive(Debug, Error)]
pub enum EntityError {
    /// Entity was not found
    #[error("The {entity_type} with id: {id} doesn't exist in the database.")]
    NotFound { entity_type: String, id: Uuid },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }

    pub fn company_not_found(id: Uuid) -> Self {
        EntityError::NotFound {
            entity_type: "company".to_string(),
            id,
        }
    }

    pub fn employee_not_found(id: Uuid) -> Self {
        EntityError::NotFound {
            entity_type: "employee".to_string(),
            id,
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors caused by a malformed request
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request body was `null` or absent
    #[error("{subject} sent from a client is null")]
    NullPayload { subject: String },

    /// The id list of a collection lookup was empty
    #[error("Parameter ids is null")]
    MissingIds,

    /// Some ids of a collection lookup did not resolve
    #[error("Collection count mismatch comparing to ids.")]
    CollectionCountMismatch { requested: usize, found: usize },

    /// `minAge` is not strictly below `maxAge`
    #[error("Max age can't be less than or equal to min age.")]
    InvalidAgeRange { min_age: u32, max_age: u32 },

    /// Invalid entity ID format
    #[error("Invalid entity ID format: '{id}'")]
    InvalidEntityId { id: String },

    /// Invalid request body
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// A query-string value could not be parsed
    #[error("Invalid query string: {message}")]
    InvalidQuery { message: String },

    /// Missing required header
    #[error("{header} header is missing.")]
    MissingHeader { header: String },

    /// The Accept header could not be parsed as a media type
    #[error("Media type not present or invalid: '{value}'")]
    InvalidMediaType { value: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::NullPayload { .. } => "NULL_PAYLOAD",
            RequestError::MissingIds => "MISSING_IDS",
            RequestError::CollectionCountMismatch { .. } => "COLLECTION_COUNT_MISMATCH",
            RequestError::InvalidAgeRange { .. } => "INVALID_AGE_RANGE",
            RequestError::InvalidEntityId { .. } => "INVALID_ENTITY_ID",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::InvalidQuery { .. } => "INVALID_QUERY",
            RequestError::MissingHeader { .. } => "MISSING_HEADER",
            RequestError::InvalidMediaType { .. } => "INVALID_MEDIA_TYPE",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised by payload validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields broke their rules
    #[error("Validation failed: {} field error(s)", .0.len())]
    FieldErrors(Vec<FieldValidationError>),
}

/// A single rule violation, as reported to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    pub fn error_code(&self) -> &'static str {
        "VALIDATION_ERROR"
    }

    /// The individual field errors
    pub fn fields(&self) -> &[FieldValidationError] {
        match self {
            ValidationError::FieldErrors(errors) => errors,
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// A lock guarding shared state was poisoned
    #[error("Failed to acquire {kind} lock: {message}")]
    LockPoisoned { kind: &'static str, message: String },

    /// A write would break a relationship between stored rows
    #[error("Storage integrity error: {message}")]
    IntegrityError { message: String },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read configuration file '{path}': {message}")]
    IoError { path: String, message: String },

    #[error("Failed to parse configuration '{file}': {message}")]
    ParseError { file: String, message: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

// =============================================================================
// Conversions
// =============================================================================

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StorageError>() {
            Ok(storage) => AppError::Storage(storage),
            Err(other) => AppError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Request(RequestError::InvalidBody {
            message: err.to_string(),
        })
    }
}
