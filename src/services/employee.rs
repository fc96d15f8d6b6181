//! Employee use cases

use crate::core::entity::Data;
use crate::core::error::{AppError, AppResult, EntityError};
use crate::core::query::{EmployeeParameters, PaginatedResponse};
use crate::core::shaping::{parse_fields, project, shape_all};
use crate::core::sort::parse_sort;
use crate::entities::employee::{Employee, EmployeeDto, EmployeeForManipulationDto, EmployeeLinks};
use crate::links::{EntityResponse, LinkBuilder, LinkResponse, RequestContext};
use crate::storage::{CompanyRepository, EmployeeRepository};
use std::sync::Arc;
use uuid::Uuid;

/// What `delete_employee_and_company` removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalOutcome {
    pub company_deleted: bool,
}

pub struct EmployeeService {
    companies: Arc<dyn CompanyRepository>,
    employees: Arc<dyn EmployeeRepository>,
    links: Arc<LinkBuilder>,
}

impl EmployeeService {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        employees: Arc<dyn EmployeeRepository>,
        links: Arc<LinkBuilder>,
    ) -> Self {
        Self {
            companies,
            employees,
            links,
        }
    }

    /// One page of a company's employees, filtered by age and name
    ///
    /// The age range is checked before any repository call.
    pub async fn get_employees(
        &self,
        company_id: Uuid,
        params: &EmployeeParameters,
        ctx: &RequestContext,
    ) -> AppResult<PaginatedResponse<LinkResponse>> {
        let filter = params.filter()?;
        self.ensure_company(company_id).await?;

        let sort = parse_sort(params.order_by.as_deref(), Employee::schema());
        let selection = parse_fields::<EmployeeDto>(params.fields.as_deref());

        let page = self
            .employees
            .list_employees(company_id, &filter, &sort, params.page())
            .await?
            .map(|employee| EmployeeDto::from(&employee));

        let rows = shape_all(&page.items, &selection).collect::<AppResult<Vec<_>>>()?;
        let data = self.links.build(
            rows,
            params.fields.as_deref(),
            ctx,
            &EmployeeLinks::new(company_id),
        )?;

        tracing::debug!(
            company_id = %company_id,
            rows = data.len(),
            total = page.meta.total_count,
            "listed employees"
        );
        Ok(PaginatedResponse {
            data,
            pagination: page.meta,
        })
    }

    pub async fn get_employee(
        &self,
        company_id: Uuid,
        id: Uuid,
        fields: Option<&str>,
        ctx: &RequestContext,
    ) -> AppResult<EntityResponse> {
        self.ensure_company(company_id).await?;
        let employee = self.find(company_id, id).await?;

        let selection = parse_fields::<EmployeeDto>(fields);
        let shaped = project(&EmployeeDto::from(&employee), &selection)?;
        self.links
            .build_one(shaped, fields, ctx, &EmployeeLinks::new(company_id))
    }

    pub async fn create_employee(
        &self,
        company_id: Uuid,
        payload: &EmployeeForManipulationDto,
    ) -> AppResult<EmployeeDto> {
        self.ensure_company(company_id).await?;

        let created = self
            .employees
            .create_employee(payload.to_employee(Uuid::new_v4(), company_id))
            .await?;
        tracing::info!(company_id = %company_id, employee_id = %created.id, "employee created");
        Ok(EmployeeDto::from(&created))
    }

    pub async fn update_employee(
        &self,
        company_id: Uuid,
        id: Uuid,
        payload: &EmployeeForManipulationDto,
    ) -> AppResult<()> {
        self.ensure_company(company_id).await?;
        let mut employee = self.find(company_id, id).await?;
        payload.apply_to(&mut employee);

        self.employees.update_employee(employee).await?;
        tracing::info!(company_id = %company_id, employee_id = %id, "employee updated");
        Ok(())
    }

    pub async fn delete_employee(&self, company_id: Uuid, id: Uuid) -> AppResult<()> {
        self.ensure_company(company_id).await?;
        if !self.employees.delete_employee(company_id, id).await? {
            return Err(EntityError::employee_not_found(id).into());
        }
        tracing::info!(company_id = %company_id, employee_id = %id, "employee deleted");
        Ok(())
    }

    /// Delete an employee, then its company once nobody works there
    pub async fn delete_employee_and_company(
        &self,
        company_id: Uuid,
        id: Uuid,
    ) -> AppResult<RemovalOutcome> {
        self.ensure_company(company_id).await?;

        let Some(company_deleted) = self
            .employees
            .delete_employee_and_company(company_id, id)
            .await?
        else {
            return Err(EntityError::employee_not_found(id).into());
        };
        tracing::info!(
            company_id = %company_id,
            employee_id = %id,
            company_deleted,
            "removed employee and checked company"
        );
        Ok(RemovalOutcome { company_deleted })
    }

    async fn ensure_company(&self, company_id: Uuid) -> AppResult<()> {
        match self.companies.get_company(company_id).await? {
            Some(_) => Ok(()),
            None => Err(EntityError::company_not_found(company_id).into()),
        }
    }

    async fn find(&self, company_id: Uuid, id: Uuid) -> AppResult<Employee> {
        self.employees
            .get_employee(company_id, id)
            .await?
            .ok_or_else(|| AppError::from(EntityError::employee_not_found(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RequestError;
    use crate::core::media::MediaType;
    use crate::core::query::{PageRequest, PagedResult, QueryFilter};
    use crate::core::sort::SortKey;
    use crate::entities::company::Company;
    use crate::entities::employee::descriptor::named_routes;
    use crate::links::RouteRegistry;
    use crate::storage::InMemoryStore;
    use crate::storage::seed::{ADMIN_SOLUTIONS_ID, IT_SOLUTIONS_ID};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use url::Url;

    /// Repository that only counts how often it is touched
    #[derive(Default)]
    struct CountingRepository {
        calls: AtomicUsize,
    }

    impl CountingRepository {
        fn touch(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl CompanyRepository for CountingRepository {
        async fn list_companies(
            &self,
            _filter: &QueryFilter,
            _sort: &[SortKey],
            page: PageRequest,
        ) -> anyhow::Result<PagedResult<Company>> {
            self.touch();
            Ok(PagedResult::new(Vec::new(), 0, page))
        }
        async fn get_company(&self, _id: Uuid) -> anyhow::Result<Option<Company>> {
            self.touch();
            Ok(None)
        }
        async fn get_companies_by_ids(&self, _ids: &[Uuid]) -> anyhow::Result<Vec<Company>> {
            self.touch();
            Ok(Vec::new())
        }
        async fn create_company(&self, company: Company, _employees: Vec<Employee>) -> anyhow::Result<Company> {
            self.touch();
            Ok(company)
        }
        async fn update_company(&self, _company: Company, _employees: Vec<Employee>) -> anyhow::Result<()> {
            self.touch();
            Ok(())
        }
        async fn delete_company(&self, _id: Uuid) -> anyhow::Result<bool> {
            self.touch();
            Ok(false)
        }
    }

    #[async_trait]
    impl EmployeeRepository for CountingRepository {
        async fn list_employees(
            &self,
            _company_id: Uuid,
            _filter: &QueryFilter,
            _sort: &[SortKey],
            page: PageRequest,
        ) -> anyhow::Result<PagedResult<Employee>> {
            self.touch();
            Ok(PagedResult::new(Vec::new(), 0, page))
        }
        async fn get_employee(&self, _company_id: Uuid, _id: Uuid) -> anyhow::Result<Option<Employee>> {
            self.touch();
            Ok(None)
        }
        async fn create_employee(&self, employee: Employee) -> anyhow::Result<Employee> {
            self.touch();
            Ok(employee)
        }
        async fn update_employee(&self, _employee: Employee) -> anyhow::Result<()> {
            self.touch();
            Ok(())
        }
        async fn delete_employee(&self, _company_id: Uuid, _id: Uuid) -> anyhow::Result<bool> {
            self.touch();
            Ok(false)
        }
        async fn delete_employee_and_company(
            &self,
            _company_id: Uuid,
            _id: Uuid,
        ) -> anyhow::Result<Option<bool>> {
            self.touch();
            Ok(None)
        }
        async fn count_employees(&self, _company_id: Uuid) -> anyhow::Result<usize> {
            self.touch();
            Ok(0)
        }
    }

    fn link_builder() -> Arc<LinkBuilder> {
        let mut routes = RouteRegistry::new();
        for route in named_routes() {
            routes.register(route);
        }
        Arc::new(LinkBuilder::new(Arc::new(routes)))
    }

    fn seeded() -> EmployeeService {
        let store = Arc::new(InMemoryStore::with_seed_data());
        EmployeeService::new(store.clone(), store, link_builder())
    }

    fn ctx(accept: &str) -> RequestContext {
        RequestContext::new(
            Url::parse("http://localhost:5000").unwrap(),
            MediaType::parse(accept).unwrap(),
        )
    }

    fn params() -> EmployeeParameters {
        EmployeeParameters::default()
    }

    #[tokio::test]
    async fn test_invalid_age_range_never_reaches_storage() {
        let repo = Arc::new(CountingRepository::default());
        let service = EmployeeService::new(repo.clone(), repo.clone(), link_builder());
        let params = EmployeeParameters {
            min_age: 40,
            max_age: 40,
            ..params()
        };

        let err = service
            .get_employees(IT_SOLUTIONS_ID, &params, &ctx("application/json"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Request(RequestError::InvalidAgeRange { min_age: 40, max_age: 40 })
        ));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_finds_one_employee() {
        let params = EmployeeParameters {
            search_term: Some("McLeaf".to_string()),
            ..params()
        };
        let response = seeded()
            .get_employees(IT_SOLUTIONS_ID, &params, &ctx("application/json"))
            .await
            .unwrap();
        assert_eq!(response.pagination.total_count, 1);

        let json = serde_json::to_value(&response.data).unwrap();
        assert_eq!(json[0]["name"], "Jana McLeaf");
        assert!(json[0].get("company_id").is_none());
    }

    #[tokio::test]
    async fn test_name_shaping_agrees_with_full_projection() {
        let service = seeded();
        let shaped = EmployeeParameters {
            fields: Some("name".to_string()),
            ..params()
        };
        let named = service
            .get_employees(IT_SOLUTIONS_ID, &shaped, &ctx("application/json"))
            .await
            .unwrap();
        let full = service
            .get_employees(IT_SOLUTIONS_ID, &params(), &ctx("application/json"))
            .await
            .unwrap();

        let named = serde_json::to_value(&named.data).unwrap();
        let full = serde_json::to_value(&full.data).unwrap();
        for (a, b) in named.as_array().unwrap().iter().zip(full.as_array().unwrap()) {
            assert_eq!(a["name"], b["name"]);
            assert_eq!(a.as_object().unwrap().len(), 2);
        }
    }

    #[tokio::test]
    async fn test_unknown_company_is_not_found() {
        let err = seeded()
            .get_employees(Uuid::new_v4(), &params(), &ctx("application/json"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_hypermedia_links_point_at_company_scope() {
        let params = EmployeeParameters {
            fields: Some("name,age".to_string()),
            ..params()
        };
        let response = seeded()
            .get_employees(ADMIN_SOLUTIONS_ID, &params, &ctx("application/vnd.codemaze.hateoas+json"))
            .await
            .unwrap();
        assert!(response.data.has_links());

        let json = serde_json::to_value(&response.data).unwrap();
        let employee_id = json["value"][0]["id"].as_str().unwrap().to_string();
        assert_eq!(
            json["value"][0]["links"][0]["href"],
            format!(
                "http://localhost:5000/api/companies/{}/employees/{}?fields=name%2Cage",
                ADMIN_SOLUTIONS_ID, employee_id
            )
        );
        assert_eq!(
            json["links"][0]["href"],
            format!("http://localhost:5000/api/companies/{}/employees", ADMIN_SOLUTIONS_ID)
        );
    }

    #[tokio::test]
    async fn test_get_employee_of_other_company_is_not_found() {
        let kane = crate::storage::seed::employees()
            .into_iter()
            .find(|e| e.name == "Kane Miller")
            .unwrap();
        let err = seeded()
            .get_employee(IT_SOLUTIONS_ID, kane.id, None, &ctx("application/json"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_employee_and_company() {
        let service = seeded();
        let sam = crate::storage::seed::employees()
            .into_iter()
            .find(|e| e.name == "Sam Raiden")
            .unwrap();
        let kane = crate::storage::seed::employees()
            .into_iter()
            .find(|e| e.name == "Kane Miller")
            .unwrap();

        let outcome = service
            .delete_employee_and_company(IT_SOLUTIONS_ID, sam.id)
            .await
            .unwrap();
        assert!(!outcome.company_deleted);

        let outcome = service
            .delete_employee_and_company(ADMIN_SOLUTIONS_ID, kane.id)
            .await
            .unwrap();
        assert!(outcome.company_deleted);

        let err = service
            .get_employees(ADMIN_SOLUTIONS_ID, &params(), &ctx("application/json"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_employee_and_company_of_unknown_employee() {
        let err = seeded()
            .delete_employee_and_company(ADMIN_SOLUTIONS_ID, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_hire_is_never_cascade_deleted() {
        for round in 0..200 {
            let store = Arc::new(InMemoryStore::new());
            let service = Arc::new(EmployeeService::new(
                store.clone(),
                store.clone(),
                link_builder(),
            ));
            let company_id = Uuid::new_v4();
            let leaver = Employee {
                id: Uuid::new_v4(),
                name: "Leaver".to_string(),
                age: 40,
                position: "Clerk".to_string(),
                company_id,
            };
            let hire = Employee {
                id: Uuid::new_v4(),
                name: "Late Hire".to_string(),
                ..leaver.clone()
            };
            let hire_id = hire.id;
            let company = Company {
                id: company_id,
                name: format!("Company {}", round),
                address: "1 Main Street".to_string(),
                country: None,
            };
            store
                .create_company(company, vec![leaver.clone()])
                .await
                .unwrap();

            let removal = tokio::spawn({
                let service = service.clone();
                async move { service.delete_employee_and_company(company_id, leaver.id).await }
            });
            let hiring = tokio::spawn({
                let store = store.clone();
                async move { store.create_employee(hire).await }
            });

            let outcome = removal.await.unwrap().unwrap();
            let hired = hiring.await.unwrap();
            let hire_present = store
                .get_employee(company_id, hire_id)
                .await
                .unwrap()
                .is_some();

            match hired {
                Ok(_) => {
                    assert!(hire_present, "round {}: accepted hire was deleted", round);
                    assert!(!outcome.company_deleted, "round {}", round);
                }
                Err(_) => assert!(outcome.company_deleted, "round {}", round),
            }
        }
    }
}
