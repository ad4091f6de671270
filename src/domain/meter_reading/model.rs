//! MeterReading, IntervalBlock and IntervalReading domain entities

use uuid::Uuid;

use crate::domain::codes::QualityOfReading;
use crate::domain::reading_type::ReadingType;
use crate::domain::resource::{impl_identity_eq, Resource};
use crate::domain::values::DateTimeInterval;

pub const METER_READING: &str = "MeterReading";
pub const INTERVAL_BLOCK: &str = "IntervalBlock";

/// A set of interval blocks sharing one reading type, owned by a usage
/// point.
#[derive(Debug, Clone)]
pub struct MeterReading {
    pub resource: Resource,
    /// Non-owning back-reference to the owning usage point.
    pub usage_point_id: Option<Uuid>,
    /// Owned: created and destroyed with this meter reading.
    pub reading_type: Option<ReadingType>,
    pub interval_blocks: Vec<IntervalBlock>,
}

impl_identity_eq!(MeterReading);

/// A time-bounded group of leaf interval readings, owned by a meter
/// reading.
#[derive(Debug, Clone)]
pub struct IntervalBlock {
    pub resource: Resource,
    /// Non-owning back-reference to the owning meter reading.
    pub meter_reading_id: Option<Uuid>,
    pub readings: Vec<IntervalReading>,
}

impl_identity_eq!(IntervalBlock);

impl IntervalBlock {
    /// Overall interval covered by this block's readings: minimum start to
    /// maximum `start + duration`. An empty block has no interval at all.
    pub fn overall_interval(&self) -> Option<DateTimeInterval> {
        DateTimeInterval::spanning(self.readings.iter().map(|r| r.time_period))
    }
}

/// Leaf reading inside an interval block. Carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalReading {
    pub time_period: DateTimeInterval,
    pub value: i64,
    /// Cost in hundred-thousandths of the reading type's currency unit.
    pub cost: Option<i64>,
    pub consumption_tier: Option<i16>,
    pub tou: Option<i16>,
    pub cpp: Option<i16>,
    pub quality: Option<QualityOfReading>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reading(start: i64, duration: i64, value: i64) -> IntervalReading {
        IntervalReading {
            time_period: DateTimeInterval::new(start, duration),
            value,
            cost: None,
            consumption_tier: None,
            tou: None,
            cpp: None,
            quality: Some(QualityOfReading::Valid),
        }
    }

    fn block(readings: Vec<IntervalReading>) -> IntervalBlock {
        IntervalBlock {
            resource: Resource::from_href(
                "/espi/1_1/resource/IntervalBlock/1",
                "/espi/1_1/resource/IntervalBlock",
                None,
                Utc::now(),
                Utc::now(),
            ),
            meter_reading_id: None,
            readings,
        }
    }

    #[test]
    fn overall_interval_is_min_max_reduction() {
        let b = block(vec![reading(100, 50, 1), reading(200, 10, 2)]);
        let overall = b.overall_interval().unwrap();
        assert_eq!(overall.start, 100);
        assert_eq!(overall.duration, 110);
    }

    #[test]
    fn empty_block_has_no_interval() {
        assert_eq!(block(vec![]).overall_interval(), None);
    }

    #[test]
    fn block_equality_ignores_readings() {
        let a = block(vec![reading(0, 900, 5)]);
        let b = block(vec![]);
        assert_eq!(a, b);
    }
}
