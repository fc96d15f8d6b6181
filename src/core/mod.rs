//! Core module containing fundamental traits and types

pub mod entity;
pub mod error;
pub mod extractors;
pub mod field;
pub mod media;
pub mod query;
pub mod shaping;
pub mod sort;
pub mod store;
pub mod validation;

pub use entity::{Data, Entity};
pub use error::{AppError, AppResult};
pub use field::{FieldSchema, FieldValue};
pub use media::MediaType;
pub use query::{
    EmployeeParameters, FieldsParameter, PageRequest, PagedResult, PaginatedResponse,
    PaginationMeta, QueryFilter, RequestParameters,
};
pub use shaping::{FieldSelection, ShapedEntity};
pub use sort::{SortDirection, SortKey};
pub use store::QueryableStore;
