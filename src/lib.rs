//! # ESPI Data Custodian
//!
//! Read-only NAESB ESPI (Green Button) resource server for energy usage
//! data.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, value objects, coded enumerations
//!   and repository traits
//! - **infrastructure**: SeaORM entities, migrations and repository
//!   implementations
//! - **api**: REST API with Atom XML rendering for the usage family, JSON
//!   for the customer/OAuth family, and Swagger documentation

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod seed;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::{
    init_database, migrator::Migrator, DatabaseConfig, DatabaseRepositoryProvider,
};

// Re-export API router
pub use api::{create_api_router, ApiState};
