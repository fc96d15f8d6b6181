//! Employee entity module

pub mod descriptor;
pub mod dto;
pub mod handlers;
pub mod links;
pub mod model;

pub use descriptor::EmployeeDescriptor;
pub use dto::EmployeeForManipulationDto;
pub use links::EmployeeLinks;
pub use model::{Employee, EmployeeDto};
