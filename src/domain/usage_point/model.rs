//! UsagePoint aggregate root

use uuid::Uuid;

use crate::domain::codes::{PhaseCode, ServiceKind, UsagePointConnectedKind};
use crate::domain::meter_reading::MeterReading;
use crate::domain::power_quality::ElectricPowerQualitySummary;
use crate::domain::resource::{impl_identity_eq, Resource};
use crate::domain::usage_summary::UsageSummary;
use crate::domain::values::{AcceptanceTest, LifecycleDates, SummaryMeasurement};

pub const RESOURCE: &str = "UsagePoint";

/// Point of energy measurement or service. Root of the usage-data
/// aggregate: meter readings, power quality summaries and usage summaries
/// live and die with it.
#[derive(Debug, Clone)]
pub struct UsagePoint {
    pub resource: Resource,
    /// Opaque role bitfield, passed through byte-for-byte.
    pub role_flags: Option<Vec<u8>>,
    pub service_category: ServiceKind,
    pub connection_state: Option<UsagePointConnectedKind>,
    pub phase_code: Option<PhaseCode>,
    pub status: Option<i16>,
    pub service_delivery_point: Option<ServiceDeliveryPoint>,
    pub local_time_parameters: Option<TimeConfiguration>,
    /// Non-owning back-reference to the retail customer served here.
    pub retail_customer_id: Option<Uuid>,
    pub estimated_load: Option<SummaryMeasurement>,
    pub nominal_service_voltage: Option<SummaryMeasurement>,
    pub rated_current: Option<SummaryMeasurement>,
    pub rated_power: Option<SummaryMeasurement>,
    pub acceptance_test: Option<AcceptanceTest>,
    pub lifecycle: Option<LifecycleDates>,
    pub pnode_refs: Vec<PnodeRef>,
    pub aggregate_node_refs: Vec<AggregateNodeRef>,
    pub meter_readings: Vec<MeterReading>,
    pub power_quality_summaries: Vec<ElectricPowerQualitySummary>,
    pub usage_summaries: Vec<UsageSummary>,
}

impl_identity_eq!(UsagePoint);

/// Delivery-point details embedded in the usage point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDeliveryPoint {
    pub name: Option<String>,
    pub tariff_profile: Option<String>,
    pub customer_agreement: Option<String>,
}

/// Local time parameters. The DST rules are opaque byte blobs defined by
/// the ESPI schema; they are stored and projected byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeConfiguration {
    pub dst_end_rule: Vec<u8>,
    /// DST shift in seconds.
    pub dst_offset: i64,
    pub dst_start_rule: Vec<u8>,
    /// Offset from UTC in seconds.
    pub tz_offset: i64,
}

/// Reference to a pricing node, valid over an effective period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PnodeRef {
    pub apnode_type: Option<String>,
    pub node_ref: String,
    /// Epoch seconds; the schema does not require the pair to be ordered.
    pub start_effective_date: Option<i64>,
    pub end_effective_date: Option<i64>,
}

/// Reference to an aggregate node, valid over an effective period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateNodeRef {
    pub anode_type: Option<String>,
    pub node_ref: String,
    pub start_effective_date: Option<i64>,
    pub end_effective_date: Option<i64>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(href: &str) -> UsagePoint {
        UsagePoint {
            resource: Resource::from_href(
                href,
                "/espi/1_1/resource/UsagePoint",
                Some("Front Electric Meter".into()),
                Utc::now(),
                Utc::now(),
            ),
            role_flags: None,
            service_category: ServiceKind::Electricity,
            connection_state: Some(UsagePointConnectedKind::Connected),
            phase_code: Some(PhaseCode::AbcN),
            status: Some(1),
            service_delivery_point: None,
            local_time_parameters: None,
            retail_customer_id: None,
            estimated_load: None,
            nominal_service_voltage: None,
            rated_current: None,
            rated_power: None,
            acceptance_test: None,
            lifecycle: None,
            pnode_refs: vec![],
            aggregate_node_refs: vec![],
            meter_readings: vec![],
            power_quality_summaries: vec![],
            usage_summaries: vec![],
        }
    }

    #[test]
    fn identity_equality_survives_field_changes() {
        let href = "/espi/1_1/resource/UsagePoint/1";
        let a = sample(href);
        let mut b = sample(href);
        b.service_category = ServiceKind::Gas;
        b.status = None;
        assert_eq!(a, b);
    }

    #[test]
    fn identity_is_derived_from_href() {
        let a = sample("/espi/1_1/resource/UsagePoint/1");
        let b = sample("/espi/1_1/resource/UsagePoint/1");
        assert_eq!(a.resource.id, b.resource.id);
    }
}
