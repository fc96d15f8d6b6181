//! Employee HTTP handlers

use super::descriptor::routes;
use super::dto::EmployeeForManipulationDto;
use crate::core::error::AppResult;
use crate::core::extractors::{AcceptMediaType, NegotiatedMediaType, QueryParameters, parse_id};
use crate::core::query::{EmployeeParameters, FieldsParameter, PaginatedResponse};
use crate::core::validation::ValidatedJson;
use crate::links::{EntityResponse, LinkResponse};
use crate::server::host::ServerHost;
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

fn ids(company_id: &str, employee_id: &str) -> AppResult<(Uuid, Uuid)> {
    Ok((parse_id(company_id)?, parse_id(employee_id)?))
}

/// Paged employee list; the `Accept` header is mandatory here
pub async fn get_employees(
    State(host): State<Arc<ServerHost>>,
    AcceptMediaType(media_type): AcceptMediaType,
    headers: HeaderMap,
    Path(company_id): Path<String>,
    QueryParameters(params): QueryParameters<EmployeeParameters>,
) -> AppResult<PaginatedResponse<LinkResponse>> {
    let company_id = parse_id(&company_id)?;
    let ctx = host.request_context(&headers, media_type);
    host.services
        .employees
        .get_employees(company_id, &params, &ctx)
        .await
}

pub async fn get_employee(
    State(host): State<Arc<ServerHost>>,
    NegotiatedMediaType(media_type): NegotiatedMediaType,
    headers: HeaderMap,
    Path((company_id, employee_id)): Path<(String, String)>,
    QueryParameters(params): QueryParameters<FieldsParameter>,
) -> AppResult<Json<EntityResponse>> {
    let (company_id, employee_id) = ids(&company_id, &employee_id)?;
    let ctx = host.request_context(&headers, media_type);
    let employee = host
        .services
        .employees
        .get_employee(company_id, employee_id, params.fields.as_deref(), &ctx)
        .await?;
    Ok(Json(employee))
}

pub async fn create_employee(
    State(host): State<Arc<ServerHost>>,
    headers: HeaderMap,
    Path(company_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<EmployeeForManipulationDto>,
) -> AppResult<impl IntoResponse> {
    let company_id = parse_id(&company_id)?;
    let employee = host
        .services
        .employees
        .create_employee(company_id, &payload)
        .await?;
    let location = host.location(
        &headers,
        routes::GET_EMPLOYEE,
        &[
            ("companyId", company_id.to_string()),
            ("employeeId", employee.id.to_string()),
        ],
    )?;
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(employee)))
}

pub async fn update_employee(
    State(host): State<Arc<ServerHost>>,
    Path((company_id, employee_id)): Path<(String, String)>,
    ValidatedJson(payload): ValidatedJson<EmployeeForManipulationDto>,
) -> AppResult<StatusCode> {
    let (company_id, employee_id) = ids(&company_id, &employee_id)?;
    host.services
        .employees
        .update_employee(company_id, employee_id, &payload)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_employee(
    State(host): State<Arc<ServerHost>>,
    Path((company_id, employee_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let (company_id, employee_id) = ids(&company_id, &employee_id)?;
    host.services
        .employees
        .delete_employee(company_id, employee_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_employee_and_company(
    State(host): State<Arc<ServerHost>>,
    Path((company_id, employee_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let (company_id, employee_id) = ids(&company_id, &employee_id)?;
    host.services
        .employees
        .delete_employee_and_company(company_id, employee_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
