//! Companies and employees
//!
//! Each entity module holds its model, request payloads, hypermedia links,
//! route descriptor and HTTP handlers.

pub mod macros;
pub mod company;
pub mod employee;
