//! API data transfer objects
//!
//! The usage family projects to ESPI XML payload DTOs carried inside Atom
//! entries; the customer and OAuth families project to JSON DTOs wrapped
//! in [`ApiResponse`]. Projection is total: `from_domain` never fails and
//! never invents defaults for absent branches.

pub mod common;
pub mod customer;
pub mod meter_reading;
pub mod oauth;
pub mod reading_type;
pub mod summaries;
pub mod usage_point;

pub use common::{ApiResponse, DateTimeIntervalDto, SummaryMeasurementDto};
pub use customer::{CustomerAccountDto, RetailCustomerDto};
pub use meter_reading::{IntervalBlockDto, IntervalReadingDto, MeterReadingDto};
pub use oauth::{ApplicationInformationDto, AuthorizationDto, SubscriptionDto};
pub use reading_type::ReadingTypeDto;
pub use summaries::{ElectricPowerQualitySummaryDto, UsageSummaryDto};
pub use usage_point::UsagePointDto;
