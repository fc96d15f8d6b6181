//! In-memory implementation of the repositories for testing and development

use super::{CompanyRepository, EmployeeRepository, seed};
use crate::core::error::StorageError;
use crate::core::query::{PageRequest, PagedResult, QueryFilter};
use crate::core::sort::SortKey;
use crate::core::store::QueryableStore;
use crate::entities::company::Company;
use crate::entities::employee::Employee;
use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    companies: IndexMap<Uuid, Company>,
    employees: IndexMap<Uuid, Employee>,
}

/// In-memory store for companies and employees
///
/// Both tables sit behind one `RwLock`, so a cascading delete or an
/// integrity check sees a consistent snapshot. Insertion order is kept,
/// which makes unsorted listings deterministic.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the demo companies and employees
    pub fn with_seed_data() -> Self {
        let tables = Tables {
            companies: seed::companies().into_iter().map(|c| (c.id, c)).collect(),
            employees: seed::employees().into_iter().map(|e| (e.id, e)).collect(),
        };
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|e| {
            anyhow::Error::from(StorageError::LockPoisoned {
                kind: "read",
                message: e.to_string(),
            })
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|e| {
            anyhow::Error::from(StorageError::LockPoisoned {
                kind: "write",
                message: e.to_string(),
            })
        })
    }
}

fn integrity(message: String) -> anyhow::Error {
    anyhow::Error::from(StorageError::IntegrityError { message })
}

impl QueryableStore<Company> for InMemoryStore {
    fn list_all(&self) -> Result<Vec<Company>> {
        Ok(self.read()?.companies.values().cloned().collect())
    }
}

impl QueryableStore<Employee> for InMemoryStore {
    fn list_all(&self) -> Result<Vec<Employee>> {
        Ok(self.read()?.employees.values().cloned().collect())
    }
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn list_companies(
        &self,
        filter: &QueryFilter,
        sort: &[SortKey],
        page: PageRequest,
    ) -> Result<PagedResult<Company>> {
        QueryableStore::<Company>::fetch_page(self, filter, sort, page)
    }

    async fn get_company(&self, id: Uuid) -> Result<Option<Company>> {
        Ok(self.read()?.companies.get(&id).cloned())
    }

    async fn get_companies_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Company>> {
        let tables = self.read()?;
        Ok(tables
            .companies
            .values()
            .filter(|company| ids.contains(&company.id))
            .cloned()
            .collect())
    }

    async fn create_company(&self, company: Company, employees: Vec<Employee>) -> Result<Company> {
        let mut tables = self.write()?;
        if tables.companies.contains_key(&company.id) {
            return Err(integrity(format!("company {} already exists", company.id)));
        }
        if let Some(stray) = employees.iter().find(|e| e.company_id != company.id) {
            return Err(integrity(format!(
                "employee {} does not belong to company {}",
                stray.id, company.id
            )));
        }

        tables.companies.insert(company.id, company.clone());
        for employee in employees {
            tables.employees.insert(employee.id, employee);
        }
        Ok(company)
    }

    async fn update_company(&self, company: Company, new_employees: Vec<Employee>) -> Result<()> {
        let mut tables = self.write()?;
        let Some(stored) = tables.companies.get_mut(&company.id) else {
            return Err(integrity(format!("company {} does not exist", company.id)));
        };
        let id = company.id;
        *stored = company;

        for mut employee in new_employees {
            employee.company_id = id;
            tables.employees.insert(employee.id, employee);
        }
        Ok(())
    }

    async fn delete_company(&self, id: Uuid) -> Result<bool> {
        let mut tables = self.write()?;
        if tables.companies.shift_remove(&id).is_none() {
            return Ok(false);
        }

        let before = tables.employees.len();
        tables.employees.retain(|_, employee| employee.company_id != id);
        tracing::debug!(
            company_id = %id,
            employees = before - tables.employees.len(),
            "cascaded company delete"
        );
        Ok(true)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryStore {
    async fn list_employees(
        &self,
        company_id: Uuid,
        filter: &QueryFilter,
        sort: &[SortKey],
        page: PageRequest,
    ) -> Result<PagedResult<Employee>> {
        let scoped = filter.clone().equal("company_id", company_id);
        QueryableStore::<Employee>::fetch_page(self, &scoped, sort, page)
    }

    async fn get_employee(&self, company_id: Uuid, id: Uuid) -> Result<Option<Employee>> {
        Ok(self
            .read()?
            .employees
            .get(&id)
            .filter(|employee| employee.company_id == company_id)
            .cloned())
    }

    async fn create_employee(&self, employee: Employee) -> Result<Employee> {
        let mut tables = self.write()?;
        if !tables.companies.contains_key(&employee.company_id) {
            return Err(integrity(format!(
                "company {} does not exist",
                employee.company_id
            )));
        }
        tables.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update_employee(&self, employee: Employee) -> Result<()> {
        let mut tables = self.write()?;
        match tables.employees.get_mut(&employee.id) {
            Some(stored) if stored.company_id == employee.company_id => {
                *stored = employee;
                Ok(())
            }
            _ => Err(integrity(format!(
                "employee {} does not exist in company {}",
                employee.id, employee.company_id
            ))),
        }
    }

    async fn delete_employee(&self, company_id: Uuid, id: Uuid) -> Result<bool> {
        let mut tables = self.write()?;
        let owned = tables
            .employees
            .get(&id)
            .is_some_and(|employee| employee.company_id == company_id);
        if owned {
            tables.employees.shift_remove(&id);
        }
        Ok(owned)
    }

    async fn delete_employee_and_company(
        &self,
        company_id: Uuid,
        id: Uuid,
    ) -> Result<Option<bool>> {
        let mut tables = self.write()?;
        let owned = tables
            .employees
            .get(&id)
            .is_some_and(|employee| employee.company_id == company_id);
        if !owned {
            return Ok(None);
        }
        tables.employees.shift_remove(&id);

        let staffed = tables
            .employees
            .values()
            .any(|employee| employee.company_id == company_id);
        if staffed {
            return Ok(Some(false));
        }
        Ok(Some(tables.companies.shift_remove(&company_id).is_some()))
    }

    async fn count_employees(&self, company_id: Uuid) -> Result<usize> {
        Ok(self
            .read()?
            .employees
            .values()
            .filter(|employee| employee.company_id == company_id)
            .count())
    }
}
