//! Entity traits defining the core abstraction for all data types

use crate::core::field::{FieldSchema, FieldValue};
use uuid::Uuid;

/// Base trait for all entities in the system.
///
/// Every entity has a stable identifier and a resource name used in URLs.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "companies")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "company")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;
}

/// Trait for entities whose fields can be read by name.
///
/// The field registry drives data shaping, sorting and free-text search, so
/// a type only needs to declare its fields once.
pub trait Data: Entity {
    /// The field accessor registry of this type
    fn schema() -> &'static FieldSchema<Self>;

    /// List of fields that should be indexed for searching
    fn indexed_fields() -> &'static [&'static str] {
        Self::schema().searchable_fields()
    }

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Self::schema().read(self, field)
    }
}
