//! Macros for reducing boilerplate when defining entities
//!
//! These macros generate the trait implementations every shapeable type
//! needs, so a type declares its fields exactly once.

/// Implement [`Entity`](crate::core::entity::Entity) and
/// [`Data`](crate::core::entity::Data) for a struct
///
/// The field list becomes the type's [`FieldSchema`](crate::core::field::FieldSchema):
/// the names accepted by `fields=` and `orderBy=`, in output order. Every
/// listed field's type must convert into a `FieldValue`.
///
/// # Example
/// ```rust,ignore
/// pub struct Employee {
///     pub id: Uuid,
///     pub name: String,
///     pub age: i32,
/// }
///
/// impl_data_entity!(
///     Employee,
///     "employee",
///     "employees",
///     id: id,
///     indexed: ["name"],
///     default_sort: "name",
///     fields: [id, name, age],
/// );
/// ```
#[macro_export]
macro_rules! impl_data_entity {
    (
        $type:ty,
        $singular:expr,
        $plural:expr,
        id: $id_field:ident,
        indexed: [ $( $indexed:expr ),* $(,)? ],
        default_sort: $default_sort:expr,
        fields: [ $( $field:ident ),+ $(,)? ] $(,)?
    ) => {
        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> ::uuid::Uuid {
                self.$id_field
            }
        }

        impl $crate::core::entity::Data for $type {
            fn schema() -> &'static $crate::core::field::FieldSchema<Self> {
                static SCHEMA: ::std::sync::OnceLock<$crate::core::field::FieldSchema<$type>> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    $crate::core::field::FieldSchema::new(stringify!($id_field))
                        $(
                            .field(stringify!($field), |entity: &$type| {
                                $crate::core::field::FieldValue::from(entity.$field.clone())
                            })
                        )+
                        .searchable(&[ $( $indexed ),* ])
                        .default_sort($default_sort)
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::entity::{Data, Entity};
    use crate::core::field::FieldValue;
    use uuid::Uuid;

    #[derive(Debug, Clone)]
    struct Gadget {
        id: Uuid,
        label: String,
        weight: i32,
        note: Option<String>,
    }

    impl_data_entity!(
        Gadget,
        "gadget",
        "gadgets",
        id: id,
        indexed: ["label"],
        default_sort: "label",
        fields: [id, label, weight, note],
    );

    fn gadget() -> Gadget {
        Gadget {
            id: Uuid::new_v4(),
            label: "Sprocket".to_string(),
            weight: 12,
            note: None,
        }
    }

    #[test]
    fn test_entity_names_and_id() {
        let g = gadget();
        assert_eq!(Gadget::resource_name(), "gadgets");
        assert_eq!(Gadget::resource_name_singular(), "gadget");
        assert_eq!(g.id(), g.id);
    }

    #[test]
    fn test_schema_lists_fields_in_order() {
        let names: Vec<_> = Gadget::schema().field_names().collect();
        assert_eq!(names, ["id", "label", "weight", "note"]);
        assert_eq!(Gadget::schema().id_field(), "id");
        assert_eq!(Gadget::indexed_fields(), ["label"]);
        assert_eq!(Gadget::schema().default_sort_field(), "label");
    }

    #[test]
    fn test_field_value_reads_through_schema() {
        let g = gadget();
        assert_eq!(g.field_value("weight"), Some(FieldValue::Integer(12)));
        assert_eq!(g.field_value("note"), Some(FieldValue::Null));
        assert_eq!(g.field_value("label"), Some(FieldValue::from("Sprocket")));
        assert_eq!(g.field_value("colour"), None);
    }
}
