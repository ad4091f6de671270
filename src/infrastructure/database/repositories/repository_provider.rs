//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::application_information::ApplicationInformationRepository;
use crate::domain::authorization::AuthorizationRepository;
use crate::domain::customer_account::CustomerAccountRepository;
use crate::domain::meter_reading::{IntervalBlockRepository, MeterReadingRepository};
use crate::domain::power_quality::ElectricPowerQualitySummaryRepository;
use crate::domain::reading_type::ReadingTypeRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::retail_customer::RetailCustomerRepository;
use crate::domain::subscription::SubscriptionRepository;
use crate::domain::usage_point::UsagePointRepository;
use crate::domain::usage_summary::UsageSummaryRepository;

use super::application_information_repository::SeaOrmApplicationInformationRepository;
use super::authorization_repository::SeaOrmAuthorizationRepository;
use super::customer_account_repository::SeaOrmCustomerAccountRepository;
use super::interval_block_repository::SeaOrmIntervalBlockRepository;
use super::meter_reading_repository::SeaOrmMeterReadingRepository;
use super::power_quality_repository::SeaOrmPowerQualityRepository;
use super::reading_type_repository::SeaOrmReadingTypeRepository;
use super::retail_customer_repository::SeaOrmRetailCustomerRepository;
use super::subscription_repository::SeaOrmSubscriptionRepository;
use super::usage_point_repository::SeaOrmUsagePointRepository;
use super::usage_summary_repository::SeaOrmUsageSummaryRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = DatabaseRepositoryProvider::new(db.clone());
/// let up = repos.usage_points().find_by_id(id).await?;
/// let blocks = repos.interval_blocks().find_all().await?;
/// ```
pub struct DatabaseRepositoryProvider {
    usage_points: SeaOrmUsagePointRepository,
    meter_readings: SeaOrmMeterReadingRepository,
    interval_blocks: SeaOrmIntervalBlockRepository,
    reading_types: SeaOrmReadingTypeRepository,
    power_quality_summaries: SeaOrmPowerQualityRepository,
    usage_summaries: SeaOrmUsageSummaryRepository,
    retail_customers: SeaOrmRetailCustomerRepository,
    customer_accounts: SeaOrmCustomerAccountRepository,
    subscriptions: SeaOrmSubscriptionRepository,
    authorizations: SeaOrmAuthorizationRepository,
    application_information: SeaOrmApplicationInformationRepository,
}

impl DatabaseRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            usage_points: SeaOrmUsagePointRepository::new(db.clone()),
            meter_readings: SeaOrmMeterReadingRepository::new(db.clone()),
            interval_blocks: SeaOrmIntervalBlockRepository::new(db.clone()),
            reading_types: SeaOrmReadingTypeRepository::new(db.clone()),
            power_quality_summaries: SeaOrmPowerQualityRepository::new(db.clone()),
            usage_summaries: SeaOrmUsageSummaryRepository::new(db.clone()),
            retail_customers: SeaOrmRetailCustomerRepository::new(db.clone()),
            customer_accounts: SeaOrmCustomerAccountRepository::new(db.clone()),
            subscriptions: SeaOrmSubscriptionRepository::new(db.clone()),
            authorizations: SeaOrmAuthorizationRepository::new(db.clone()),
            application_information: SeaOrmApplicationInformationRepository::new(db),
        }
    }
}

impl RepositoryProvider for DatabaseRepositoryProvider {
    fn usage_points(&self) -> &dyn UsagePointRepository {
        &self.usage_points
    }

    fn meter_readings(&self) -> &dyn MeterReadingRepository {
        &self.meter_readings
    }

    fn interval_blocks(&self) -> &dyn IntervalBlockRepository {
        &self.interval_blocks
    }

    fn reading_types(&self) -> &dyn ReadingTypeRepository {
        &self.reading_types
    }

    fn power_quality_summaries(&self) -> &dyn ElectricPowerQualitySummaryRepository {
        &self.power_quality_summaries
    }

    fn usage_summaries(&self) -> &dyn UsageSummaryRepository {
        &self.usage_summaries
    }

    fn retail_customers(&self) -> &dyn RetailCustomerRepository {
        &self.retail_customers
    }

    fn customer_accounts(&self) -> &dyn CustomerAccountRepository {
        &self.customer_accounts
    }

    fn subscriptions(&self) -> &dyn SubscriptionRepository {
        &self.subscriptions
    }

    fn authorizations(&self) -> &dyn AuthorizationRepository {
        &self.authorizations
    }

    fn application_information(&self) -> &dyn ApplicationInformationRepository {
        &self.application_information
    }
}
