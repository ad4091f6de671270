//! Measurement value objects.

use crate::domain::codes::{UnitMultiplier, UnitSymbol};

/// A measured or estimated quantity with its unit and scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryMeasurement {
    pub power_of_ten_multiplier: UnitMultiplier,
    /// When the measurement was taken, seconds since the Unix epoch.
    pub time_stamp: Option<i64>,
    pub uom: UnitSymbol,
    pub value: i64,
    /// Free-text pointer to the reading type describing this measurement.
    pub reading_type_ref: Option<String>,
}

impl SummaryMeasurement {
    pub fn new(value: i64, uom: UnitSymbol, power_of_ten_multiplier: UnitMultiplier) -> Self {
        Self {
            power_of_ten_multiplier,
            time_stamp: None,
            uom,
            value,
            reading_type_ref: None,
        }
    }
}

/// Numerator/denominator pair used by reading-type arguments and
/// interharmonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RationalNumber {
    pub numerator: i64,
    pub denominator: i64,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_measurement_defaults_optional_parts_absent() {
        let m = SummaryMeasurement::new(9500, UnitSymbol::Watts, UnitMultiplier::Kilo);
        assert_eq!(m.value, 9500);
        assert!(m.time_stamp.is_none());
        assert!(m.reading_type_ref.is_none());
    }
}
