//! Company request payloads

use crate::core::error::FieldValidationError;
use crate::core::validation::{ValidatedPayload, collect_errors, prefixed};
use crate::entities::company::model::Company;
use crate::entities::employee::dto::EmployeeForManipulationDto;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Body of company creation and update
///
/// Employees listed here are created under the company.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CompanyForManipulationDto {
    #[validate(
        required(message = "Company Name is a required field."),
        length(min = 1, max = 60, message = "Maximum length for the Name is 60 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Company Address is a required field."),
        length(min = 1, max = 60, message = "Maximum length for the Address is 60 characters.")
    )]
    pub address: Option<String>,

    pub country: Option<String>,

    pub employees: Option<Vec<EmployeeForManipulationDto>>,
}

impl CompanyForManipulationDto {
    /// Build a new company from a validated payload
    pub fn to_company(&self, id: Uuid) -> Company {
        Company {
            id,
            name: self.name.clone().unwrap_or_default(),
            address: self.address.clone().unwrap_or_default(),
            country: self.country.clone(),
        }
    }

    /// Copy the payload onto an existing company
    pub fn apply_to(&self, company: &mut Company) {
        company.name = self.name.clone().unwrap_or_default();
        company.address = self.address.clone().unwrap_or_default();
        company.country = self.country.clone();
    }

    pub fn employees(&self) -> &[EmployeeForManipulationDto] {
        self.employees.as_deref().unwrap_or_default()
    }
}

impl ValidatedPayload for CompanyForManipulationDto {
    fn subject() -> &'static str {
        "Company"
    }

    fn collection_subject() -> &'static str {
        "Company collection"
    }

    fn field_errors(&self) -> Vec<FieldValidationError> {
        let mut errors = collect_errors(self.validate());
        for (index, employee) in self.employees().iter().enumerate() {
            errors.extend(prefixed(
                &format!("employees[{}]", index),
                employee.field_errors(),
            ));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CompanyForManipulationDto {
        CompanyForManipulationDto {
            name: Some("Acme".to_string()),
            address: Some("1 Main St".to_string()),
            country: Some("USA".to_string()),
            employees: None,
        }
    }

    #[test]
    fn test_valid_company() {
        assert!(valid().field_errors().is_empty());
    }

    #[test]
    fn test_missing_and_long_fields() {
        let dto = CompanyForManipulationDto {
            name: None,
            address: Some("x".repeat(61)),
            ..valid()
        };
        let fields: Vec<_> = dto.field_errors().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, ["address", "name"]);
    }

    #[test]
    fn test_nested_employee_errors_are_prefixed() {
        let dto = CompanyForManipulationDto {
            employees: Some(vec![EmployeeForManipulationDto {
                name: Some("Ann".to_string()),
                age: Some(12),
                position: Some("Intern".to_string()),
            }]),
            ..valid()
        };
        let errors = dto.field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "employees[0].age");
    }

    #[test]
    fn test_to_company_copies_fields() {
        let id = Uuid::new_v4();
        let company = valid().to_company(id);
        assert_eq!(company.id, id);
        assert_eq!(company.name, "Acme");
        assert_eq!(company.country.as_deref(), Some("USA"));
    }
}
