//! Application services
//!
//! Services validate requests, talk to the repositories and run the shaping
//! pipeline. Handlers stay thin and only translate HTTP in and out.

pub mod company;
pub mod employee;

pub use company::CompanyService;
pub use employee::{EmployeeService, RemovalOutcome};

use crate::links::LinkBuilder;
use crate::storage::{CompanyRepository, EmployeeRepository};
use std::sync::Arc;

/// Every service, built over one store
pub struct ServiceManager {
    pub companies: CompanyService,
    pub employees: EmployeeService,
}

impl ServiceManager {
    pub fn from_repositories(
        companies: Arc<dyn CompanyRepository>,
        employees: Arc<dyn EmployeeRepository>,
        links: Arc<LinkBuilder>,
    ) -> Self {
        Self {
            companies: CompanyService::new(companies.clone(), links.clone()),
            employees: EmployeeService::new(companies, employees, links),
        }
    }
}
