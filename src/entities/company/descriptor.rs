//! Entity descriptor for Company

use super::handlers;
use crate::links::NamedRoute;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::host::ServerHost;
use axum::http::Method;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Route names, as used in links and `Location` headers
pub mod routes {
    pub const GET_COMPANIES: &str = "GetCompanies";
    pub const CREATE_COMPANY: &str = "CreateCompany";
    pub const COMPANY_BY_ID: &str = "CompanyById";
    pub const UPDATE_COMPANY: &str = "UpdateCompany";
    pub const DELETE_COMPANY: &str = "DeleteCompany";
    pub const COMPANY_COLLECTION: &str = "CompanyCollection";
    pub const CREATE_COMPANY_COLLECTION: &str = "CreateCompanyCollection";
}

/// Path templates shared by the router and the route registry
pub mod paths {
    pub const COMPANIES: &str = "/api/companies";
    pub const COMPANY: &str = "/api/companies/{companyId}";
    pub const COLLECTION: &str = "/api/companies/collection";
    pub const COLLECTION_BY_IDS: &str = "/api/companies/collection/{ids}";
}

/// Methods accepted on the company collection root
pub const ALLOWED_METHODS: &str = "GET, POST, DELETE, PUT, OPTIONS";

pub fn named_routes() -> Vec<NamedRoute> {
    vec![
        NamedRoute::new(routes::GET_COMPANIES, Method::GET, paths::COMPANIES),
        NamedRoute::new(routes::CREATE_COMPANY, Method::POST, paths::COMPANIES),
        NamedRoute::new(routes::COMPANY_BY_ID, Method::GET, paths::COMPANY),
        NamedRoute::new(routes::UPDATE_COMPANY, Method::PUT, paths::COMPANY),
        NamedRoute::new(routes::DELETE_COMPANY, Method::DELETE, paths::COMPANY),
        NamedRoute::new(routes::COMPANY_COLLECTION, Method::GET, paths::COLLECTION_BY_IDS),
        NamedRoute::new(
            routes::CREATE_COMPANY_COLLECTION,
            Method::POST,
            paths::COLLECTION,
        ),
    ]
}

/// Descriptor for the Company entity
pub struct CompanyDescriptor;

impl EntityDescriptor for CompanyDescriptor {
    fn entity_type(&self) -> &str {
        "company"
    }

    fn plural(&self) -> &str {
        "companies"
    }

    fn named_routes(&self) -> Vec<NamedRoute> {
        named_routes()
    }

    fn build_routes(&self, host: Arc<ServerHost>) -> Router {
        Router::new()
            .route(
                paths::COMPANIES,
                get(handlers::get_companies)
                    .post(handlers::create_company)
                    .options(handlers::company_options),
            )
            .route(
                paths::COMPANY,
                get(handlers::get_company)
                    .put(handlers::update_company)
                    .delete(handlers::delete_company),
            )
            .route(
                paths::COLLECTION,
                axum::routing::post(handlers::create_company_collection),
            )
            .route(
                paths::COLLECTION_BY_IDS,
                get(handlers::get_company_collection),
            )
            .with_state(host)
    }
}
