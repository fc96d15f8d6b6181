//! Data shaping: field selection and sparse projection of entities
//!
//! A client passes `fields=name,age` and gets back objects carrying only those
//! keys. [`FieldSelection::parse`] turns the raw spec into a validated list of
//! canonical field names, and [`project`] / [`shape_all`] read them through
//! the type's [`FieldSchema`](crate::core::field::FieldSchema).

use crate::core::entity::Data;
use crate::core::error::{AppError, AppResult};
use crate::core::field::{FieldSchema, FieldValue};
use indexmap::IndexMap;
use serde::Serialize;
use uuid::Uuid;

/// Ordered, deduplicated set of canonical field names to project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<&'static str>,
}

impl FieldSelection {
    /// Every field of the schema, in declaration order
    pub fn all<T>(schema: &FieldSchema<T>) -> Self {
        Self {
            fields: schema.field_names().collect(),
        }
    }

    /// Parse a comma-separated field spec against a schema
    ///
    /// - absent, empty or whitespace-only spec: every field
    /// - tokens are trimmed and matched case-insensitively
    /// - unknown tokens are dropped, duplicates keep their first position
    /// - the identifier field is prepended when the caller left it out
    pub fn parse<T>(spec: Option<&str>, schema: &FieldSchema<T>) -> Self {
        let Some(spec) = spec.filter(|s| !s.trim().is_empty()) else {
            return Self::all(schema);
        };

        let mut fields: Vec<&'static str> = Vec::new();
        for token in spec.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match schema.resolve(token) {
                Some(name) if !fields.contains(&name) => fields.push(name),
                Some(_) => {}
                None => tracing::debug!(field = token, "ignoring unknown field in selection"),
            }
        }

        let id_field = schema.id_field();
        if !fields.contains(&id_field) {
            fields.insert(0, id_field);
        }

        Self { fields }
    }

    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| *f == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Convenience wrapper around [`FieldSelection::parse`] for a [`Data`] type
pub fn parse_fields<T: Data>(spec: Option<&str>) -> FieldSelection {
    FieldSelection::parse(spec, T::schema())
}

/// Sparse view of one entity
///
/// `id` always identifies the source row even when the identifier field was
/// not projected; only `fields` is serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedEntity {
    #[serde(skip)]
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: IndexMap<String, FieldValue>,
}

impl ShapedEntity {
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }
}

/// Project one entity onto the selected fields
///
/// A selected field without an accessor means the selection was built for a
/// different schema; that is reported as an internal error.
pub fn project<T: Data>(entity: &T, selection: &FieldSelection) -> AppResult<ShapedEntity> {
    let schema = T::schema();
    let mut fields = IndexMap::with_capacity(selection.len());
    for &name in selection.fields() {
        let value = schema.read(entity, name).ok_or_else(|| {
            AppError::Internal(format!(
                "field '{}' is not readable on {}",
                name,
                T::resource_name_singular()
            ))
        })?;
        fields.insert(name.to_string(), value);
    }

    Ok(ShapedEntity {
        id: entity.id(),
        fields,
    })
}

/// Lazily project a sequence of entities, preserving order
pub fn shape_all<'a, T: Data>(
    entities: &'a [T],
    selection: &'a FieldSelection,
) -> impl Iterator<Item = AppResult<ShapedEntity>> + 'a {
    entities.iter().map(move |entity| project(entity, selection))
}
