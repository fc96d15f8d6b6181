//! Hypermedia links
//!
//! This module provides the link model, the named route registry links are
//! resolved through, and the builder that attaches links to shaped rows.

pub mod builder;
pub mod model;
pub mod registry;

pub use builder::{LinkBuilder, LinkSpec, RequestContext, ResourceLinks};
pub use model::{EntityResponse, Link, LinkCollectionWrapper, LinkResponse, LinkedEntity};
pub use registry::{NamedRoute, RouteRegistry};
