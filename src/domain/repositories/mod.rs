//! Repository provider interface

use crate::domain::application_information::ApplicationInformationRepository;
use crate::domain::authorization::AuthorizationRepository;
use crate::domain::customer_account::CustomerAccountRepository;
use crate::domain::meter_reading::{IntervalBlockRepository, MeterReadingRepository};
use crate::domain::power_quality::ElectricPowerQualitySummaryRepository;
use crate::domain::reading_type::ReadingTypeRepository;
use crate::domain::retail_customer::RetailCustomerRepository;
use crate::domain::subscription::SubscriptionRepository;
use crate::domain::usage_point::UsagePointRepository;
use crate::domain::usage_summary::UsageSummaryRepository;

/// Unified access to every per-aggregate repository. The infrastructure
/// layer provides the single implementation backed by one connection pool.
pub trait RepositoryProvider: Send + Sync {
    fn usage_points(&self) -> &dyn UsagePointRepository;
    fn meter_readings(&self) -> &dyn MeterReadingRepository;
    fn interval_blocks(&self) -> &dyn IntervalBlockRepository;
    fn reading_types(&self) -> &dyn ReadingTypeRepository;
    fn power_quality_summaries(&self) -> &dyn ElectricPowerQualitySummaryRepository;
    fn usage_summaries(&self) -> &dyn UsageSummaryRepository;
    fn retail_customers(&self) -> &dyn RetailCustomerRepository;
    fn customer_accounts(&self) -> &dyn CustomerAccountRepository;
    fn subscriptions(&self) -> &dyn SubscriptionRepository;
    fn authorizations(&self) -> &dyn AuthorizationRepository;
    fn application_information(&self) -> &dyn ApplicationInformationRepository;
}
