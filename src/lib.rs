//! # company-employees
//!
//! A CRUD web API over companies and their employees, built around a
//! data-shaping and pagination pipeline:
//!
//! - **Field selection**: `?fields=name,age` picks the returned fields,
//!   validated against a per-type accessor registry
//! - **Paging, filtering and sorting**: `pageNumber`, `pageSize`, `orderBy`,
//!   `minAge`/`maxAge` and `searchTerm`, with paging metadata returned in the
//!   `X-Pagination` header
//! - **Hypermedia**: clients asking for a `*.hateoas+json` media type get
//!   self/update/delete/create links with every row
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use company_employees::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_config(AppConfig::default())
//!         .with_store(InMemoryStore::with_seed_data())
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod links;
pub mod server;
pub mod services;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::{Data, Entity},
        error::{AppError, AppResult},
        field::{FieldSchema, FieldValue},
        media::MediaType,
        query::{EmployeeParameters, PagedResult, PaginationMeta, RequestParameters},
        shaping::{FieldSelection, ShapedEntity, parse_fields, project},
    };

    // === Macros ===
    pub use crate::impl_data_entity;

    // === Entities ===
    pub use crate::entities::company::{Company, CompanyDto, CompanyForManipulationDto};
    pub use crate::entities::employee::{Employee, EmployeeDto, EmployeeForManipulationDto};

    // === Links ===
    pub use crate::links::{Link, LinkBuilder, LinkResponse, RequestContext, RouteRegistry};

    // === Storage & services ===
    pub use crate::services::ServiceManager;
    pub use crate::storage::{CompanyRepository, EmployeeRepository, InMemoryStore};

    // === Config & server ===
    pub use crate::config::AppConfig;
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
