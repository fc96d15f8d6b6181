//! Storage abstractions and the in-memory backend
//!
//! Services only talk to the repository traits below; [`InMemoryStore`]
//! implements both and stands in for a relational database.

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryStore;

use crate::core::query::{PageRequest, PagedResult, QueryFilter};
use crate::core::sort::SortKey;
use crate::entities::company::Company;
use crate::entities::employee::Employee;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence operations on companies
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Filtered, ordered page of companies plus the total match count
    async fn list_companies(
        &self,
        filter: &QueryFilter,
        sort: &[SortKey],
        page: PageRequest,
    ) -> Result<PagedResult<Company>>;

    async fn get_company(&self, id: Uuid) -> Result<Option<Company>>;

    /// Companies whose id is in `ids`; absent ids are skipped
    async fn get_companies_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Company>>;

    /// Insert a company together with its initial employees
    async fn create_company(&self, company: Company, employees: Vec<Employee>) -> Result<Company>;

    /// Replace a stored company and add `new_employees` to it
    async fn update_company(&self, company: Company, new_employees: Vec<Employee>) -> Result<()>;

    /// Delete a company and all of its employees; `false` when absent
    async fn delete_company(&self, id: Uuid) -> Result<bool>;
}

/// Persistence operations on employees, always scoped to a company
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list_employees(
        &self,
        company_id: Uuid,
        filter: &QueryFilter,
        sort: &[SortKey],
        page: PageRequest,
    ) -> Result<PagedResult<Employee>>;

    async fn get_employee(&self, company_id: Uuid, id: Uuid) -> Result<Option<Employee>>;

    /// Insert an employee; the owning company must exist
    async fn create_employee(&self, employee: Employee) -> Result<Employee>;

    async fn update_employee(&self, employee: Employee) -> Result<()>;

    /// `false` when the employee does not belong to the company
    async fn delete_employee(&self, company_id: Uuid, id: Uuid) -> Result<bool>;

    /// Delete an employee, then its company if nobody else works there
    ///
    /// Runs as one unit: an employee added concurrently either lands before
    /// the check and keeps the company alive, or is rejected because the
    /// company is gone. `None` when the employee does not belong to the
    /// company, otherwise whether the company was deleted.
    async fn delete_employee_and_company(
        &self,
        company_id: Uuid,
        id: Uuid,
    ) -> Result<Option<bool>>;

    async fn count_employees(&self, company_id: Uuid) -> Result<usize>;
}
