//! ReadingType domain entity

use crate::domain::codes::{
    AccumulationKind, CommodityKind, Currency, DataQualifierKind, FlowDirectionKind,
    MeasurementKind, PhaseCode, QualityOfReading, TimeAttributeKind, UnitMultiplier, UnitSymbol,
};
use crate::domain::resource::{impl_identity_eq, Resource};
use crate::domain::values::RationalNumber;
use uuid::Uuid;

pub const RESOURCE: &str = "ReadingType";

/// Characteristics of the readings under a meter reading: a flat bag of
/// coded attributes with no children of its own.
#[derive(Debug, Clone)]
pub struct ReadingType {
    pub resource: Resource,
    /// Non-owning back-reference to the owning meter reading.
    pub meter_reading_id: Option<Uuid>,
    pub accumulation_behaviour: Option<AccumulationKind>,
    pub commodity: Option<CommodityKind>,
    pub consumption_tier: Option<i16>,
    pub currency: Option<Currency>,
    pub data_qualifier: Option<DataQualifierKind>,
    pub default_quality: Option<QualityOfReading>,
    pub flow_direction: Option<FlowDirectionKind>,
    /// Seconds per interval reading.
    pub interval_length: Option<i64>,
    pub kind: Option<MeasurementKind>,
    pub phase: Option<PhaseCode>,
    pub power_of_ten_multiplier: Option<UnitMultiplier>,
    pub time_attribute: Option<TimeAttributeKind>,
    pub uom: Option<UnitSymbol>,
    pub cpp: Option<i16>,
    pub tou: Option<i16>,
    pub argument: Option<RationalNumber>,
    pub interharmonic: Option<RationalNumber>,
}

impl_identity_eq!(ReadingType);

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(href: &str) -> ReadingType {
        ReadingType {
            resource: Resource::from_href(
                href,
                "/espi/1_1/resource/ReadingType",
                None,
                Utc::now(),
                Utc::now(),
            ),
            meter_reading_id: None,
            accumulation_behaviour: Some(AccumulationKind::DeltaData),
            commodity: Some(CommodityKind::ElectricitySecondaryMetered),
            consumption_tier: None,
            currency: Some(Currency::Usd),
            data_qualifier: Some(DataQualifierKind::Normal),
            default_quality: Some(QualityOfReading::Valid),
            flow_direction: Some(FlowDirectionKind::Forward),
            interval_length: Some(900),
            kind: Some(MeasurementKind::Energy),
            phase: None,
            power_of_ten_multiplier: Some(UnitMultiplier::None),
            time_attribute: None,
            uom: Some(UnitSymbol::WattHours),
            cpp: None,
            tou: None,
            argument: None,
            interharmonic: None,
        }
    }

    #[test]
    fn equality_is_identity_only() {
        let href = "/espi/1_1/resource/ReadingType/1";
        let a = sample(href);
        let mut b = sample(href);
        b.interval_length = Some(3600);
        b.uom = Some(UnitSymbol::Watts);
        assert_eq!(a, b);
    }

    #[test]
    fn different_hrefs_are_not_equal() {
        let a = sample("/espi/1_1/resource/ReadingType/1");
        let b = sample("/espi/1_1/resource/ReadingType/2");
        assert_ne!(a, b);
    }
}
