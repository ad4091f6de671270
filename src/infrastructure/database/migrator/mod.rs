//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_retail_customers;
mod m20250101_000002_create_usage_points;
mod m20250101_000003_create_meter_readings;
mod m20250101_000004_create_summaries;
mod m20250101_000005_create_customer_accounts;
mod m20250101_000006_create_oauth;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_retail_customers::Migration),
            Box::new(m20250101_000002_create_usage_points::Migration),
            Box::new(m20250101_000003_create_meter_readings::Migration),
            Box::new(m20250101_000004_create_summaries::Migration),
            Box::new(m20250101_000005_create_customer_accounts::Migration),
            Box::new(m20250101_000006_create_oauth::Migration),
        ]
    }
}
