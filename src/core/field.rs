//! Field values and per-type field accessor registries

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a UUID if possible
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            FieldValue::Uuid(u) => Some(*u),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Case-insensitive substring match; only string values can match
    pub fn contains_ignore_case(&self, needle_lowercase: &str) -> bool {
        match self {
            FieldValue::String(s) => s.to_lowercase().contains(needle_lowercase),
            _ => false,
        }
    }

    /// Total ordering used when sorting rows by this value
    ///
    /// Strings compare case-insensitively first, nulls sort before everything,
    /// integers and floats compare numerically with each other.
    pub fn sort_cmp(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (String(a), String(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Integer(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (Boolean(a), Boolean(b)) => a.cmp(b),
            (Uuid(a), Uuid(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Boolean(_) => 1,
            FieldValue::Integer(_) | FieldValue::Float(_) => 2,
            FieldValue::String(_) => 3,
            FieldValue::Uuid(_) => 4,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        FieldValue::Uuid(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Reads one field of `T`
pub type FieldGetter<T> = fn(&T) -> FieldValue;

/// A named accessor in a [`FieldSchema`]
pub struct FieldAccessor<T> {
    name: &'static str,
    get: FieldGetter<T>,
}

impl<T> FieldAccessor<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn read(&self, entity: &T) -> FieldValue {
        (self.get)(entity)
    }
}

/// The readable fields of a type, in declaration order
///
/// Built once per type (see `impl_data_entity!`) and shared by field
/// selection, projection, sorting and search.
pub struct FieldSchema<T> {
    id_field: &'static str,
    default_sort: &'static str,
    searchable: &'static [&'static str],
    fields: Vec<FieldAccessor<T>>,
}

impl<T> FieldSchema<T> {
    /// Create an empty schema whose identifier field is `id_field`
    pub fn new(id_field: &'static str) -> Self {
        Self {
            id_field,
            default_sort: id_field,
            searchable: &[],
            fields: Vec::new(),
        }
    }

    /// Register a readable field
    pub fn field(mut self, name: &'static str, get: FieldGetter<T>) -> Self {
        self.fields.push(FieldAccessor { name, get });
        self
    }

    /// Fields scanned by free-text search
    pub fn searchable(mut self, fields: &'static [&'static str]) -> Self {
        self.searchable = fields;
        self
    }

    /// Field used when a sort expression yields no usable key
    pub fn default_sort(mut self, field: &'static str) -> Self {
        self.default_sort = field;
        self
    }

    pub fn id_field(&self) -> &'static str {
        self.id_field
    }

    pub fn default_sort_field(&self) -> &'static str {
        self.default_sort
    }

    pub fn searchable_fields(&self) -> &'static [&'static str] {
        self.searchable
    }

    /// All field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Canonical name of `name`, ignoring case and underscores
    ///
    /// `fullAddress`, `FullAddress` and `full_address` all resolve to
    /// `full_address`.
    pub fn resolve(&self, name: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| wire_name_matches(f.name, name))
            .map(|f| f.name)
    }

    /// Accessor for an exact (canonical) field name
    pub fn accessor(&self, name: &str) -> Option<&FieldAccessor<T>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Read a field by canonical name
    pub fn read(&self, entity: &T, name: &str) -> Option<FieldValue> {
        self.accessor(name).map(|accessor| accessor.read(entity))
    }
}

fn wire_name_matches(canonical: &str, requested: &str) -> bool {
    let mut left = canonical.bytes().filter(|b| *b != b'_');
    let mut right = requested.bytes().filter(|b| *b != b'_');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(&b) => {}
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget {
        id: Uuid,
        label: String,
        size: i32,
    }

    fn schema() -> FieldSchema<Widget> {
        FieldSchema::new("id")
            .field("id", |p: &Widget| p.id.into())
            .field("label", |p| p.label.clone().into())
            .field("size", |p| p.size.into())
            .searchable(&["label"])
            .default_sort("label")
    }

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_string(), Some("test"));
        assert_eq!(value.as_integer(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_option_none_is_null() {
        let value: FieldValue = Option::<String>::None.into();
        assert!(value.is_null());
    }

    #[test]
    fn test_sort_cmp_is_case_insensitive_for_strings() {
        let a = FieldValue::from("alpha");
        let b = FieldValue::from("Beta");
        assert_eq!(a.sort_cmp(&b), Ordering::Less);
        assert_eq!(
            FieldValue::Integer(3).sort_cmp(&FieldValue::Float(2.5)),
            Ordering::Greater
        );
        assert_eq!(FieldValue::Null.sort_cmp(&a), Ordering::Less);
    }

    #[test]
    fn test_schema_resolves_names_case_insensitively() {
        let schema = schema();
        assert_eq!(schema.resolve("LABEL"), Some("label"));
        assert_eq!(schema.resolve("Size"), Some("size"));
        assert_eq!(schema.resolve("missing"), None);
        assert_eq!(schema.resolve("_"), None);
        assert_eq!(schema.field_names().collect::<Vec<_>>(), ["id", "label", "size"]);
    }

    #[test]
    fn test_schema_resolves_camel_case_names() {
        let schema: FieldSchema<Widget> = FieldSchema::new("id")
            .field("id", |w: &Widget| w.id.into())
            .field("full_address", |w| w.label.clone().into());
        assert_eq!(schema.resolve("fullAddress"), Some("full_address"));
        assert_eq!(schema.resolve("FULLADDRESS"), Some("full_address"));
        assert_eq!(schema.resolve("full_address"), Some("full_address"));
        assert_eq!(schema.resolve("fullAddres"), None);
    }

    #[test]
    fn test_schema_reads_values() {
        let schema = schema();
        let widget = Widget {
            id: Uuid::nil(),
            label: "Widget".to_string(),
            size: 7,
        };
        assert_eq!(schema.read(&widget, "size"), Some(FieldValue::Integer(7)));
        assert_eq!(schema.read(&widget, "Size"), None);
        assert_eq!(schema.searchable_fields(), ["label"]);
        assert_eq!(schema.default_sort_field(), "label");
    }
}
