//! Employee model and its client-facing representation

use crate::impl_data_entity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored employee, owned by one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub position: String,
    pub company_id: Uuid,
}

impl_data_entity!(
    Employee,
    "employee",
    "employees",
    id: id,
    indexed: ["name"],
    default_sort: "name",
    fields: [id, name, age, position, company_id],
);

/// An employee as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub position: String,
}

impl_data_entity!(
    EmployeeDto,
    "employee",
    "employees",
    id: id,
    indexed: ["name"],
    default_sort: "name",
    fields: [id, name, age, position],
);

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            age: employee.age,
            position: employee.position.clone(),
        }
    }
}
