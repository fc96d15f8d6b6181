//! Entity descriptor for Employee

use super::handlers;
use crate::links::NamedRoute;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::host::ServerHost;
use axum::http::Method;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Route names, as used in links and `Location` headers
pub mod routes {
    pub const GET_EMPLOYEES: &str = "GetEmployeesForCompany";
    pub const GET_EMPLOYEE: &str = "GetEmployeeForCompany";
    pub const CREATE_EMPLOYEE: &str = "CreateEmployeeForCompany";
    pub const UPDATE_EMPLOYEE: &str = "UpdateEmployeeForCompany";
    pub const DELETE_EMPLOYEE: &str = "DeleteEmployeeForCompany";
    pub const DELETE_EMPLOYEE_AND_COMPANY: &str = "DeleteEmployeeAndCompany";
}

/// Path templates shared by the router and the route registry
pub mod paths {
    pub const EMPLOYEES: &str = "/api/companies/{companyId}/employees";
    pub const EMPLOYEE: &str = "/api/companies/{companyId}/employees/{employeeId}";
    pub const EMPLOYEE_AND_COMPANY: &str =
        "/api/companies/{companyId}/employees/remove-employee-and-company/{employeeId}";
}

pub fn named_routes() -> Vec<NamedRoute> {
    vec![
        NamedRoute::new(routes::GET_EMPLOYEES, Method::GET, paths::EMPLOYEES),
        NamedRoute::new(routes::CREATE_EMPLOYEE, Method::POST, paths::EMPLOYEES),
        NamedRoute::new(routes::GET_EMPLOYEE, Method::GET, paths::EMPLOYEE),
        NamedRoute::new(routes::UPDATE_EMPLOYEE, Method::PUT, paths::EMPLOYEE),
        NamedRoute::new(routes::DELETE_EMPLOYEE, Method::DELETE, paths::EMPLOYEE),
        NamedRoute::new(
            routes::DELETE_EMPLOYEE_AND_COMPANY,
            Method::DELETE,
            paths::EMPLOYEE_AND_COMPANY,
        ),
    ]
}

/// Descriptor for the Employee entity
pub struct EmployeeDescriptor;

impl EntityDescriptor for EmployeeDescriptor {
    fn entity_type(&self) -> &str {
        "employee"
    }

    fn plural(&self) -> &str {
        "employees"
    }

    fn named_routes(&self) -> Vec<NamedRoute> {
        named_routes()
    }

    fn build_routes(&self, host: Arc<ServerHost>) -> Router {
        Router::new()
            .route(
                paths::EMPLOYEES,
                get(handlers::get_employees).post(handlers::create_employee),
            )
            .route(
                paths::EMPLOYEE,
                get(handlers::get_employee)
                    .put(handlers::update_employee)
                    .delete(handlers::delete_employee),
            )
            .route(
                paths::EMPLOYEE_AND_COMPANY,
                axum::routing::delete(handlers::delete_employee_and_company),
            )
            .with_state(host)
    }
}
