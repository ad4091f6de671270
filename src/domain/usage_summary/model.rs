//! UsageSummary domain entity with its owned line items

use uuid::Uuid;

use crate::domain::codes::{Currency, EnrollmentStatus, QualityOfReading};
use crate::domain::resource::{impl_identity_eq, Resource};
use crate::domain::values::{DateTimeInterval, SummaryMeasurement};

pub const RESOURCE: &str = "UsageSummary";

/// Billing-period roll-up for a usage point. Owns its line items and
/// tariff rider references.
#[derive(Debug, Clone)]
pub struct UsageSummary {
    pub resource: Resource,
    /// Non-owning back-reference to the owning usage point.
    pub usage_point_id: Option<Uuid>,
    pub billing_period: Option<DateTimeInterval>,
    /// Monetary amounts in hundred-thousandths of the currency unit.
    pub bill_last_period: Option<i64>,
    pub bill_to_date: Option<i64>,
    pub cost_additional_last_period: Option<i64>,
    pub currency: Option<Currency>,
    pub overall_consumption_last_period: Option<SummaryMeasurement>,
    pub current_billing_period_overall_consumption: Option<SummaryMeasurement>,
    pub current_day_net_consumption: Option<SummaryMeasurement>,
    pub current_day_overall_consumption: Option<SummaryMeasurement>,
    pub peak_demand: Option<SummaryMeasurement>,
    pub previous_day_net_consumption: Option<SummaryMeasurement>,
    pub quality_of_reading: Option<QualityOfReading>,
    pub read_cycle: Option<String>,
    /// When this summary's status was captured, seconds since the epoch.
    pub status_time_stamp: i64,
    pub tariff_profile: Option<String>,
    pub billing_charge_source: Option<BillingChargeSource>,
    pub line_items: Vec<LineItem>,
    pub tariff_rider_refs: Vec<TariffRiderRef>,
}

impl_identity_eq!(UsageSummary);

/// One cost detail line. No identity of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Amount in hundred-thousandths of the summary's currency unit.
    pub amount: i64,
    pub rounding: Option<i64>,
    /// Seconds since the Unix epoch.
    pub date_time: i64,
    pub note: String,
    pub measurement: Option<SummaryMeasurement>,
}

/// Rider programme the usage point is enrolled in for this period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffRiderRef {
    pub rider_type: String,
    pub enrollment_status: EnrollmentStatus,
    /// Seconds since the Unix epoch.
    pub effective_date: i64,
}

/// Source of the billing charges on this summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingChargeSource {
    pub agency_name: Option<String>,
}
