//! Company entity module

pub mod descriptor;
pub mod dto;
pub mod handlers;
pub mod links;
pub mod model;

pub use descriptor::CompanyDescriptor;
pub use dto::CompanyForManipulationDto;
pub use links::CompanyLinks;
pub use model::{Company, CompanyDto};
