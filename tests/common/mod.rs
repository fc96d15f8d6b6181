//! Shared helpers for the HTTP tests

#![allow(dead_code)]

use axum::http::{HeaderName, header};
use axum_test::{TestResponse, TestServer};
use company_employees::prelude::*;
use serde_json::Value;

pub const IT_SOLUTIONS: &str = "c9d4c053-49b6-410c-bc78-2d54a9991870";
pub const ADMIN_SOLUTIONS: &str = "c9d4c053-49b6-410c-bc78-2d54a9991871";
pub const MISSING_COMPANY: &str = "c9d4c053-49b6-410c-bc78-2d54a9991872";
pub const JANA_MCLEAF: &str = "86dba8c0-d178-41e7-938c-ed49778fb52a";
pub const KANE_MILLER: &str = "021ca3c1-0deb-4afd-ae94-2159a8479811";

pub const BASE_URL: &str = "http://api.test/";
pub const HATEOAS: &str = "application/vnd.codemaze.hateoas+json";

/// Seeded server resolving links against [`BASE_URL`]
pub fn seeded_server() -> TestServer {
    server_with("seed: true")
}

/// Empty server resolving links against [`BASE_URL`]
pub fn empty_server() -> TestServer {
    server_with("seed: false")
}

fn server_with(extra: &str) -> TestServer {
    let yaml = format!("server:\n  public_url: {}\n{}\n", BASE_URL, extra);
    let config = AppConfig::from_yaml_str(&yaml).expect("config");
    let app = ServerBuilder::new()
        .with_config(config)
        .build()
        .expect("Failed to build app");
    TestServer::try_new(app).expect("Failed to create test server")
}

pub fn employees_path(company_id: &str) -> String {
    format!("/api/companies/{}/employees", company_id)
}

/// Parsed `X-Pagination` header
pub fn pagination(response: &TestResponse) -> Value {
    let raw = response.header(HeaderName::from_static("x-pagination"));
    serde_json::from_str(raw.to_str().expect("ascii header")).expect("pagination json")
}

pub fn location(response: &TestResponse) -> String {
    response
        .header(header::LOCATION)
        .to_str()
        .expect("ascii header")
        .to_string()
}
