//! Hypermedia controls offered by companies

use super::descriptor::routes;
use crate::links::{LinkSpec, ResourceLinks};
use axum::http::Method;
use uuid::Uuid;

pub struct CompanyLinks;

impl ResourceLinks for CompanyLinks {
    fn entity_links(&self, id: Uuid, fields: &str) -> Vec<LinkSpec> {
        vec![
            LinkSpec::new(routes::COMPANY_BY_ID, "self", Method::GET)
                .with("companyId", id)
                .with("fields", fields),
            LinkSpec::new(routes::DELETE_COMPANY, "delete_company", Method::DELETE)
                .with("companyId", id),
            LinkSpec::new(routes::UPDATE_COMPANY, "update_company", Method::PUT)
                .with("companyId", id),
            LinkSpec::new(routes::CREATE_COMPANY, "create_company", Method::POST),
        ]
    }

    fn collection_links(&self) -> Vec<LinkSpec> {
        vec![LinkSpec::new(routes::GET_COMPANIES, "self", Method::GET)]
    }
}
