//! Payload validation
//!
//! Request bodies declare their rules with `validator`'s derive and are
//! checked by the [`ValidatedJson`] extractor before reaching handlers.

pub mod extractor;

pub use extractor::ValidatedJson;

use crate::core::error::FieldValidationError;
use serde::de::DeserializeOwned;

/// A request body that knows how to validate itself
pub trait ValidatedPayload: DeserializeOwned + Send {
    /// Name used when the body is `null`
    fn subject() -> &'static str;

    /// Name used when a list of these is `null`
    fn collection_subject() -> &'static str {
        "Collection"
    }

    /// Every broken rule, empty when the payload is valid
    fn field_errors(&self) -> Vec<FieldValidationError>;
}

impl<T: ValidatedPayload> ValidatedPayload for Vec<T> {
    fn subject() -> &'static str {
        T::collection_subject()
    }

    fn field_errors(&self) -> Vec<FieldValidationError> {
        self.iter()
            .enumerate()
            .flat_map(|(index, item)| prefixed(&format!("[{}]", index), item.field_errors()))
            .collect()
    }
}

/// Flatten `validator`'s error map into a sorted list of field errors
pub fn collect_errors(
    result: Result<(), validator::ValidationErrors>,
) -> Vec<FieldValidationError> {
    let Err(errors) = result else {
        return Vec::new();
    };

    let mut collected: Vec<FieldValidationError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid ({})", field, e.code));
                FieldValidationError::new(field.clone(), message)
            })
        })
        .collect();
    collected.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    collected
}

/// Qualify nested field names with `prefix` (`employees[0].name`)
pub fn prefixed(prefix: &str, errors: Vec<FieldValidationError>) -> Vec<FieldValidationError> {
    errors
        .into_iter()
        .map(|e| FieldValidationError::new(format!("{}.{}", prefix, e.field), e.message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct Applicant {
        #[validate(required(message = "Name is a required field."))]
        name: Option<String>,
        #[validate(range(min = 18, message = "Too young"))]
        age: i32,
    }

    impl ValidatedPayload for Applicant {
        fn subject() -> &'static str {
            "Applicant"
        }

        fn field_errors(&self) -> Vec<FieldValidationError> {
            collect_errors(self.validate())
        }
    }

    #[test]
    fn test_valid_payload_has_no_errors() {
        let applicant = Applicant {
            name: Some("ok".to_string()),
            age: 20,
        };
        assert!(applicant.field_errors().is_empty());
    }

    #[test]
    fn test_errors_are_sorted_by_field() {
        let applicant = Applicant { name: None, age: 3 };
        let errors = applicant.field_errors();
        assert_eq!(
            errors,
            vec![
                FieldValidationError::new("age", "Too young"),
                FieldValidationError::new("name", "Name is a required field."),
            ]
        );
    }

    #[test]
    fn test_collection_errors_are_indexed() {
        let applicants = vec![
            Applicant {
                name: Some("ok".to_string()),
                age: 30,
            },
            Applicant { name: None, age: 30 },
        ];
        let errors = applicants.field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "[1].name");
    }
}
