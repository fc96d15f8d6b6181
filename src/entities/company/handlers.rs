//! Company HTTP handlers

use super::descriptor::{ALLOWED_METHODS, routes};
use super::dto::CompanyForManipulationDto;
use super::model::CompanyDto;
use crate::core::error::AppResult;
use crate::core::extractors::{NegotiatedMediaType, QueryParameters, parse_id, parse_id_list};
use crate::core::query::{FieldsParameter, PaginatedResponse, RequestParameters};
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

pub async fn get_companies(
    State(host): State<Arc<ServerHost>>,
    NegotiatedMediaType(media_type): NegotiatedMediaType,
    headers: HeaderMap,
    QueryParameters(params): QueryParameters<RequestParameters>,
) -> AppResult<PaginatedResponse<LinkResponse>> {
    let ctx = host.request_context(&headers, media_type);
    host.services.companies.get_companies(&params, &ctx).await
}

pub async fn company_options() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, ALLOWED_METHODS)])
}

pub async fn get_company(
    State(host): State<Arc<ServerHost>>,
    NegotiatedMediaType(media_type): NegotiatedMediaType,
    headers: HeaderMap,
    Path(id): Path<String>,
    QueryParameters(params): QueryParameters<FieldsParameter>,
) -> AppResult<Json<EntityResponse>> {
    let id = parse_id(&id)?;
    let ctx = host.request_context(&headers, media_type);
    let company = host
        .services
        .companies
        .get_company(id, params.fields.as_deref(), &ctx)
        .await?;
    Ok(Json(company))
}

pub async fn get_company_collection(
    State(host): State<Arc<ServerHost>>,
    Path(ids): Path<String>,
) -> AppResult<Json<Vec<CompanyDto>>> {
    let ids = parse_id_list(&ids)?;
    let companies = host.services.companies.get_companies_by_ids(&ids).await?;
    Ok(Json(companies))
}

pub async fn create_company(
    State(host): State<Arc<ServerHost>>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CompanyForManipulationDto>,
) -> AppResult<impl IntoResponse> {
    let company = host.services.companies.create_company(&payload).await?;
    let location = host.location(
        &headers,
        routes::COMPANY_BY_ID,
        &[("companyId", company.id.to_string())],
    )?;
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(company)))
}

pub async fn create_company_collection(
    State(host): State<Arc<ServerHost>>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<Vec<CompanyForManipulationDto>>,
) -> AppResult<impl IntoResponse> {
    let (companies, ids) = host
        .services
        .companies
        .create_company_collection(&payload)
        .await?;
    let location = host.location(
        &headers,
        routes::COMPANY_COLLECTION,
        &[("ids", format!("({})", ids))],
    )?;
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(companies)))
}

pub async fn update_company(
    State(host): State<Arc<ServerHost>>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CompanyForManipulationDto>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    host.services.companies.update_company(id, &payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_company(
    State(host): State<Arc<ServerHost>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    host.services.companies.delete_company(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
