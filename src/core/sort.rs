//! Sort expressions (`orderBy=name desc, age`)

use crate::core::entity::Data;
use crate::core::field::FieldSchema;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One key of a multi-key sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: &'static str,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(field: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// Parse `field [asc|desc], ...` into sort keys, highest priority first
///
/// Unknown fields are skipped and a field named twice keeps its first
/// clause. When nothing usable remains the schema's default sort field is
/// used, ascending.
pub fn parse_sort<T>(spec: Option<&str>, schema: &FieldSchema<T>) -> Vec<SortKey> {
    let mut keys: Vec<SortKey> = Vec::new();

    for clause in spec.unwrap_or_default().split(',') {
        let mut parts = clause.split_whitespace();
        let Some(token) = parts.next() else {
            continue;
        };
        let Some(field) = schema.resolve(token) else {
            tracing::debug!(field = token, "ignoring unknown sort field");
            continue;
        };
        if keys.iter().any(|k| k.field == field) {
            continue;
        }

        let direction = match parts.next() {
            Some(dir) if dir.eq_ignore_ascii_case("desc") => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        keys.push(SortKey { field, direction });
    }

    if keys.is_empty() {
        keys.push(SortKey::ascending(schema.default_sort_field()));
    }
    keys
}

/// Compare two rows key by key
pub fn compare_by_keys<T: Data>(a: &T, b: &T, keys: &[SortKey]) -> Ordering {
    let schema = T::schema();
    for key in keys {
        let (Some(left), Some(right)) = (schema.read(a, key.field), schema.read(b, key.field))
        else {
            continue;
        };
        let ordering = match key.direction {
            SortDirection::Ascending => left.sort_cmp(&right),
            SortDirection::Descending => right.sort_cmp(&left),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Stable multi-key sort
pub fn sort_by_keys<T: Data>(rows: &mut [T], keys: &[SortKey]) {
    rows.sort_by(|a, b| compare_by_keys(a, b, keys));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;

    struct Row;

    fn schema() -> FieldSchema<Row> {
        FieldSchema::new("id")
            .field("id", |_| FieldValue::Null)
            .field("name", |_| FieldValue::Null)
            .field("age", |_| FieldValue::Null)
            .default_sort("name")
    }

    #[test]
    fn test_empty_spec_uses_default_field() {
        assert_eq!(parse_sort(None, &schema()), [SortKey::ascending("name")]);
        assert_eq!(parse_sort(Some(" , "), &schema()), [SortKey::ascending("name")]);
    }

    #[test]
    fn test_direction_and_priority() {
        let keys = parse_sort(Some("age DESC, name"), &schema());
        assert_eq!(keys, [SortKey::descending("age"), SortKey::ascending("name")]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let keys = parse_sort(Some("salary desc, Age desc"), &schema());
        assert_eq!(keys, [SortKey::descending("age")]);

        let keys = parse_sort(Some("salary desc"), &schema());
        assert_eq!(keys, [SortKey::ascending("name")]);
    }

    #[test]
    fn test_repeated_field_keeps_first_clause() {
        let keys = parse_sort(Some("age, age desc"), &schema());
        assert_eq!(keys, [SortKey::ascending("age")]);
    }
}
