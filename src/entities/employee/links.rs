//! Hypermedia controls offered by employees

use super::descriptor::routes;
use crate::links::{LinkSpec, ResourceLinks};
use axum::http::Method;
use uuid::Uuid;

/// Employee controls, scoped to the owning company
pub struct EmployeeLinks {
    pub company_id: Uuid,
}

impl EmployeeLinks {
    pub fn new(company_id: Uuid) -> Self {
        Self { company_id }
    }
}

impl ResourceLinks for EmployeeLinks {
    fn entity_links(&self, id: Uuid, fields: &str) -> Vec<LinkSpec> {
        let company_id = self.company_id;
        vec![
            LinkSpec::new(routes::GET_EMPLOYEE, "self", Method::GET)
                .with("companyId", company_id)
                .with("employeeId", id)
                .with("fields", fields),
            LinkSpec::new(routes::DELETE_EMPLOYEE, "delete_employee", Method::DELETE)
                .with("companyId", company_id)
                .with("employeeId", id),
            LinkSpec::new(routes::UPDATE_EMPLOYEE, "update_employee", Method::PUT)
                .with("companyId", company_id)
                .with("employeeId", id),
            LinkSpec::new(routes::CREATE_EMPLOYEE, "create_employee", Method::POST)
                .with("companyId", company_id),
        ]
    }

    fn collection_links(&self) -> Vec<LinkSpec> {
        vec![
            LinkSpec::new(routes::GET_EMPLOYEES, "self", Method::GET)
                .with("companyId", self.company_id),
        ]
    }
}
