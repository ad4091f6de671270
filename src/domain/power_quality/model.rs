//! ElectricPowerQualitySummary domain entity

use uuid::Uuid;

use crate::domain::resource::{impl_identity_eq, Resource};
use crate::domain::values::{DateTimeInterval, PerCent};

pub const RESOURCE: &str = "ElectricPowerQualitySummary";

/// Power-quality metrics for one summary interval, owned by a usage point.
/// Flat numeric fields; the only validated one is the voltage imbalance
/// percentage.
#[derive(Debug, Clone)]
pub struct ElectricPowerQualitySummary {
    pub resource: Resource,
    /// Non-owning back-reference to the owning usage point.
    pub usage_point_id: Option<Uuid>,
    pub flicker_plt: Option<i64>,
    pub flicker_pst: Option<i64>,
    pub harmonic_voltage: Option<i64>,
    pub long_interruptions: Option<i64>,
    pub mains_voltage: Option<i64>,
    pub measurement_protocol: Option<i16>,
    pub power_frequency: Option<i64>,
    pub rapid_voltage_changes: Option<i64>,
    pub short_interruptions: Option<i64>,
    pub summary_interval: DateTimeInterval,
    pub supply_voltage_dips: Option<i64>,
    pub supply_voltage_imbalance: Option<PerCent>,
    pub supply_voltage_variations: Option<i64>,
    pub temp_overvoltages: Option<i64>,
}

impl_identity_eq!(ElectricPowerQualitySummary);
