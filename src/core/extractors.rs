//! Axum extractors for content negotiation, query strings and id lists

use crate::core::error::{AppError, AppResult, RequestError};
use crate::core::media::MediaType;
use axum::extract::{FromRequestParts, Query};
use axum::http::header::ACCEPT;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use uuid::Uuid;

fn accept_header(parts: &Parts) -> AppResult<Option<MediaType>> {
    let Some(raw) = parts.headers.get(ACCEPT) else {
        return Ok(None);
    };
    let raw = raw.to_str().map_err(|_| {
        AppError::Request(RequestError::InvalidMediaType {
            value: String::from_utf8_lossy(raw.as_bytes()).into_owned(),
        })
    })?;
    MediaType::parse(raw).map(Some)
}

/// The `Accept` media type; the request is rejected when it is missing
///
/// ```rust,ignore
/// pub async fn list(AcceptMediaType(media): AcceptMediaType) { ... }
/// ```
#[derive(Debug, Clone)]
pub struct AcceptMediaType(pub MediaType);

impl<S> FromRequestParts<S> for AcceptMediaType
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        accept_header(parts)?.map(AcceptMediaType).ok_or_else(|| {
            AppError::Request(RequestError::MissingHeader {
                header: "Accept".to_string(),
            })
        })
    }
}

/// The `Accept` media type, `application/json` when absent
#[derive(Debug, Clone)]
pub struct NegotiatedMediaType(pub MediaType);

impl<S> FromRequestParts<S> for NegotiatedMediaType
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(NegotiatedMediaType(
            accept_header(parts)?.unwrap_or_else(MediaType::json),
        ))
    }
}

/// Query-string parameters; parse failures become a JSON bad request
#[derive(Debug, Clone, Default)]
pub struct QueryParameters<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParameters<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::Request(RequestError::InvalidQuery {
                    message: rejection.body_text(),
                })
            })?;
        Ok(QueryParameters(params))
    }
}

/// Parse a path segment like `(id1,id2)` or `id1,id2` into ids
pub fn parse_id_list(raw: &str) -> AppResult<Vec<Uuid>> {
    let inner = raw.trim();
    let inner = inner
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(inner);

    let tokens: Vec<&str> = inner
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(AppError::Request(RequestError::MissingIds));
    }

    tokens
        .into_iter()
        .map(|token| {
            Uuid::parse_str(token).map_err(|_| {
                AppError::Request(RequestError::InvalidEntityId {
                    id: token.to_string(),
                })
            })
        })
        .collect()
}

/// Parse a single id path segment
pub fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        AppError::Request(RequestError::InvalidEntityId {
            id: raw.to_string(),
        })
    })
}
