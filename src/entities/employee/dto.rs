//! Employee request payloads

use crate::core::error::FieldValidationError;
use crate::core::validation::{ValidatedPayload, collect_errors};
use crate::entities::employee::model::Employee;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Body of employee creation and update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EmployeeForManipulationDto {
    #[validate(
        required(message = "Employee name is a required field."),
        length(min = 1, max = 30, message = "Maximum length for the Name is 30 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Employee age is a required field."),
        range(min = 18, message = "Employee age must be at least 18 years old.")
    )]
    pub age: Option<i32>,

    #[validate(
        required(message = "Employee position is a required field."),
        length(min = 1, max = 20, message = "Maximum length for the Position is 20 characters.")
    )]
    pub position: Option<String>,
}

impl EmployeeForManipulationDto {
    /// Build a new employee of `company_id` from a validated payload
    pub fn to_employee(&self, id: Uuid, company_id: Uuid) -> Employee {
        Employee {
            id,
            name: self.name.clone().unwrap_or_default(),
            age: self.age.unwrap_or_default(),
            position: self.position.clone().unwrap_or_default(),
            company_id,
        }
    }

    /// Copy the payload onto an existing employee
    pub fn apply_to(&self, employee: &mut Employee) {
        employee.name = self.name.clone().unwrap_or_default();
        employee.age = self.age.unwrap_or_default();
        employee.position = self.position.clone().unwrap_or_default();
    }
}

impl ValidatedPayload for EmployeeForManipulationDto {
    fn subject() -> &'static str {
        "Employee"
    }

    fn field_errors(&self) -> Vec<FieldValidationError> {
        collect_errors(self.validate())
    }
}
