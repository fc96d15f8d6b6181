//! Company model and its client-facing representation

use crate::impl_data_entity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub country: Option<String>,
}

impl_data_entity!(
    Company,
    "company",
    "companies",
    id: id,
    indexed: ["name", "country"],
    default_sort: "name",
    fields: [id, name, address, country],
);

/// A company as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDto {
    pub id: Uuid,
    pub name: String,
    pub full_address: String,
}

impl_data_entity!(
    CompanyDto,
    "company",
    "companies",
    id: id,
    indexed: ["name"],
    default_sort: "name",
    fields: [id, name, full_address],
);

impl From<&Company> for CompanyDto {
    fn from(company: &Company) -> Self {
        let full_address = match company.country.as_deref().map(str::trim) {
            Some(country) if !country.is_empty() => format!("{} {}", company.address, country),
            _ => company.address.clone(),
        };

        Self {
            id: company.id,
            name: company.name.clone(),
            full_address,
        }
    }
}
