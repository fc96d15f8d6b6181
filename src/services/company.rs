//! Company use cases

use crate::core::entity::Data;
use crate::core::error::{AppError, AppResult, EntityError, RequestError};
use crate::core::query::{PaginatedResponse, RequestParameters};
use crate::core::shaping::{parse_fields, project, shape_all};
use crate::core::sort::parse_sort;
use crate::entities::company::{Company, CompanyDto, CompanyForManipulationDto, CompanyLinks};
use crate::entities::employee::Employee;
use crate::links::{EntityResponse, LinkBuilder, LinkResponse, RequestContext};
use crate::storage::CompanyRepository;
use std::sync::Arc;
use uuid::Uuid;

pub struct CompanyService {
    repository: Arc<dyn CompanyRepository>,
    links: Arc<LinkBuilder>,
}

impl CompanyService {
    pub fn new(repository: Arc<dyn CompanyRepository>, links: Arc<LinkBuilder>) -> Self {
        Self { repository, links }
    }

    /// One page of shaped companies, linked when the media type asks for it
    pub async fn get_companies(
        &self,
        params: &RequestParameters,
        ctx: &RequestContext,
    ) -> AppResult<PaginatedResponse<LinkResponse>> {
        let sort = parse_sort(params.order_by.as_deref(), Company::schema());
        let selection = parse_fields::<CompanyDto>(params.fields.as_deref());

        let page = self
            .repository
            .list_companies(&params.filter(), &sort, params.page())
            .await?
            .map(|company| CompanyDto::from(&company));

        let rows = shape_all(&page.items, &selection).collect::<AppResult<Vec<_>>>()?;
        let data = self
            .links
            .build(rows, params.fields.as_deref(), ctx, &CompanyLinks)?;

        tracing::debug!(
            rows = data.len(),
            total = page.meta.total_count,
            "listed companies"
        );
        Ok(PaginatedResponse {
            data,
            pagination: page.meta,
        })
    }

    pub async fn get_company(
        &self,
        id: Uuid,
        fields: Option<&str>,
        ctx: &RequestContext,
    ) -> AppResult<EntityResponse> {
        let company = self.find(id).await?;
        let selection = parse_fields::<CompanyDto>(fields);
        let shaped = project(&CompanyDto::from(&company), &selection)?;
        self.links.build_one(shaped, fields, ctx, &CompanyLinks)
    }

    /// Companies for every id, in the order asked for
    ///
    /// Fails when any id is unknown, rather than returning a partial list.
    pub async fn get_companies_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<CompanyDto>> {
        if ids.is_empty() {
            return Err(RequestError::MissingIds.into());
        }

        let found = self.repository.get_companies_by_ids(ids).await?;
        let ordered: Vec<CompanyDto> = ids
            .iter()
            .filter_map(|id| found.iter().find(|company| company.id == *id))
            .map(CompanyDto::from)
            .collect();

        if ordered.len() != ids.len() {
            return Err(RequestError::CollectionCountMismatch {
                requested: ids.len(),
                found: ordered.len(),
            }
            .into());
        }
        Ok(ordered)
    }

    pub async fn create_company(&self, payload: &CompanyForManipulationDto) -> AppResult<CompanyDto> {
        let company = payload.to_company(Uuid::new_v4());
        let employees = new_employees(company.id, payload);

        let created = self.repository.create_company(company, employees).await?;
        tracing::info!(company_id = %created.id, "company created");
        Ok(CompanyDto::from(&created))
    }

    /// Create every company and return them with their ids joined as `a,b,c`
    pub async fn create_company_collection(
        &self,
        payloads: &[CompanyForManipulationDto],
    ) -> AppResult<(Vec<CompanyDto>, String)> {
        if payloads.is_empty() {
            return Err(RequestError::NullPayload {
                subject: "Company collection".to_string(),
            }
            .into());
        }

        let mut created = Vec::with_capacity(payloads.len());
        for payload in payloads {
            created.push(self.create_company(payload).await?);
        }

        let ids = created
            .iter()
            .map(|company| company.id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Ok((created, ids))
    }

    /// Overwrite a company; nested employees in the payload are added to it
    pub async fn update_company(&self, id: Uuid, payload: &CompanyForManipulationDto) -> AppResult<()> {
        let mut company = self.find(id).await?;
        payload.apply_to(&mut company);
        let employees = new_employees(id, payload);

        self.repository.update_company(company, employees).await?;
        tracing::info!(company_id = %id, "company updated");
        Ok(())
    }

    /// Delete a company together with its employees
    pub async fn delete_company(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete_company(id).await? {
            return Err(EntityError::company_not_found(id).into());
        }
        tracing::info!(company_id = %id, "company deleted");
        Ok(())
    }

    async fn find(&self, id: Uuid) -> AppResult<Company> {
        self.repository
            .get_company(id)
            .await?
            .ok_or_else(|| AppError::from(EntityError::company_not_found(id)))
    }
}

fn new_employees(company_id: Uuid, payload: &CompanyForManipulationDto) -> Vec<Employee> {
    payload
        .employees()
        .iter()
        .map(|employee| employee.to_employee(Uuid::new_v4(), company_id))
        .collect()
}
