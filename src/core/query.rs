//! Query parameters, filters and pagination utilities

use crate::core::entity::Data;
use crate::core::error::{AppError, AppResult, RequestError};
use crate::core::field::FieldValue;
use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Header carrying the serialized [`PaginationMeta`]
pub const PAGINATION_HEADER: HeaderName = HeaderName::from_static("x-pagination");

/// Largest page a client may request
pub const MAX_PAGE_SIZE: usize = 50;

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_MAX_AGE: u32 = 100;

fn default_page_number() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_age() -> u32 {
    DEFAULT_MAX_AGE
}

/// One page of a result set, already clamped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: usize,
    pub size: usize,
}

impl PageRequest {
    /// Build a page request, clamping number to `>= 1` and size to `1..=MAX_PAGE_SIZE`
    pub fn new(number: usize, size: usize) -> Self {
        Self {
            number: number.max(1),
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Rows to skip before this page starts
    pub fn offset(&self) -> usize {
        (self.number - 1).saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(default_page_number(), default_page_size())
    }
}

/// Paging, sorting and shaping parameters shared by every list endpoint
///
/// # Example
/// ```text
/// GET /api/companies?pageNumber=2&pageSize=5&orderBy=name desc&fields=name,country&searchTerm=usa
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParameters {
    /// Page number (starts at 1)
    #[serde(default = "default_page_number", alias = "page_number")]
    pub page_number: usize,

    /// Rows per page, clamped to `1..=50`
    #[serde(default = "default_page_size", alias = "page_size")]
    pub page_size: usize,

    /// Sort expression: `field [asc|desc], field [asc|desc], ...`
    #[serde(default, alias = "order_by")]
    pub order_by: Option<String>,

    /// Comma-separated list of fields to return
    #[serde(default)]
    pub fields: Option<String>,

    /// Case-insensitive substring matched against the searchable fields
    #[serde(default, alias = "search_term")]
    pub search_term: Option<String>,
}

impl Default for RequestParameters {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
            order_by: None,
            fields: None,
            search_term: None,
        }
    }
}

impl RequestParameters {
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page_number, self.page_size)
    }

    pub fn filter(&self) -> QueryFilter {
        QueryFilter::default().search(self.search_term.clone())
    }
}

/// Shaping parameter of single-entity reads: `?fields=name,age`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldsParameter {
    #[serde(default)]
    pub fields: Option<String>,
}

/// Parameters of the employee list: paging plus age range and name search
///
/// Kept flat rather than embedding [`RequestParameters`] because query-string
/// deserialization cannot parse numbers through `#[serde(flatten)]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeParameters {
    #[serde(default = "default_page_number", alias = "page_number")]
    pub page_number: usize,

    #[serde(default = "default_page_size", alias = "page_size")]
    pub page_size: usize,

    #[serde(default, alias = "order_by")]
    pub order_by: Option<String>,

    #[serde(default)]
    pub fields: Option<String>,

    /// Inclusive lower age bound
    #[serde(default, alias = "min_age")]
    pub min_age: u32,

    /// Inclusive upper age bound
    #[serde(default = "default_max_age", alias = "max_age")]
    pub max_age: u32,

    /// Case-insensitive substring matched against the employee name
    #[serde(default, alias = "search_term")]
    pub search_term: Option<String>,
}

impl Default for EmployeeParameters {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
            order_by: None,
            fields: None,
            min_age: 0,
            max_age: default_max_age(),
            search_term: None,
        }
    }
}

impl EmployeeParameters {
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page_number, self.page_size)
    }

    /// `minAge` must be strictly below `maxAge`
    pub fn valid_age_range(&self) -> bool {
        self.min_age < self.max_age
    }

    /// Filter described by these parameters
    ///
    /// Fails with a bad request when the age range is empty, so callers can
    /// reject the request before touching storage.
    pub fn filter(&self) -> AppResult<QueryFilter> {
        if !self.valid_age_range() {
            return Err(AppError::Request(RequestError::InvalidAgeRange {
                min_age: self.min_age,
                max_age: self.max_age,
            }));
        }

        Ok(QueryFilter::default()
            .range("age", i64::from(self.min_age), i64::from(self.max_age))
            .search(self.search_term.clone()))
    }
}

/// Inclusive integer range on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeFilter {
    pub field: &'static str,
    pub min: i64,
    pub max: i64,
}

/// Row predicate evaluated through an entity's field registry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFilter {
    pub equals: Vec<(&'static str, FieldValue)>,
    pub ranges: Vec<RangeFilter>,
    pub search_term: Option<String>,
}

impl QueryFilter {
    /// Require `field == value`
    pub fn equal(mut self, field: &'static str, value: impl Into<FieldValue>) -> Self {
        self.equals.push((field, value.into()));
        self
    }

    /// Require `min <= field <= max`
    pub fn range(mut self, field: &'static str, min: i64, max: i64) -> Self {
        self.ranges.push(RangeFilter { field, min, max });
        self
    }

    /// Require one of the searchable fields to contain `term`; blank terms match everything
    pub fn search(mut self, term: Option<String>) -> Self {
        self.search_term = term
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());
        self
    }

    pub fn matches<T: Data>(&self, entity: &T) -> bool {
        let equals_ok = self
            .equals
            .iter()
            .all(|(field, expected)| entity.field_value(field).as_ref() == Some(expected));

        let ranges_ok = self.ranges.iter().all(|range| {
            entity
                .field_value(range.field)
                .and_then(|value| value.as_integer())
                .is_some_and(|value| range.min <= value && value <= range.max)
        });

        let search_ok = match &self.search_term {
            None => true,
            Some(term) => T::indexed_fields().iter().any(|field| {
                entity
                    .field_value(field)
                    .is_some_and(|value| value.contains_ignore_case(term))
            }),
        };

        equals_ok && ranges_ok && search_ok
    }
}

/// Pagination metadata, sent to clients in the `X-Pagination` header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub current_page: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total_count: usize,

    /// Whether there is a previous page
    pub has_previous: bool,

    /// Whether there is a next page
    pub has_next: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: PageRequest, total_count: usize) -> Self {
        let total_pages = total_count.div_ceil(page.size);

        Self {
            current_page: page.number,
            total_pages,
            page_size: page.size,
            total_count,
            has_previous: page.number > 1,
            has_next: page.number < total_pages,
        }
    }

    /// JSON form used as the header value
    pub fn to_header_value(&self) -> AppResult<HeaderValue> {
        let json = serde_json::to_string(self)
            .map_err(|e| AppError::Internal(format!("failed to serialize pagination: {}", e)))?;
        HeaderValue::from_str(&json)
            .map_err(|e| AppError::Internal(format!("invalid pagination header: {}", e)))
    }
}

/// Rows of one page together with the paging metadata of the whole set
#[derive(Debug, Clone)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total_count: usize, page: PageRequest) -> Self {
        Self {
            items,
            meta: PaginationMeta::new(page, total_count),
        }
    }

    /// Convert the rows, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

/// Paginated response: `data` as the JSON body, `pagination` as `X-Pagination`
#[derive(Debug)]
pub struct PaginatedResponse<T> {
    /// The page body
    pub data: T,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T: Serialize> IntoResponse for PaginatedResponse<T> {
    fn into_response(self) -> Response {
        match self.pagination.to_header_value() {
            Ok(header) => ([(PAGINATION_HEADER, header)], Json(self.data)).into_response(),
            Err(err) => err.into_response(),
        }
    }
}
