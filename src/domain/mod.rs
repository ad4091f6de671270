//! Core domain: entities, value objects, coded enumerations and the
//! repository interfaces over them.

pub mod application_information;
pub mod authorization;
pub mod codes;
pub mod customer_account;
pub mod error;
pub mod meter_reading;
pub mod power_quality;
pub mod reading_type;
pub mod repositories;
pub mod resource;
pub mod retail_customer;
pub mod subscription;
pub mod usage_point;
pub mod usage_summary;
pub mod values;

pub use error::{DomainError, DomainResult};
pub use repositories::RepositoryProvider;
pub use resource::Resource;
