//! REST API module for the ESPI data custodian
//!
//! Serves the usage family as Atom XML and the customer/OAuth family as
//! JSON, plus health, metrics and Swagger UI.

pub mod atom;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use router::{create_api_router, ApiState};
