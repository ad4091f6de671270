//! MeterReading and IntervalBlock XML payload DTOs

use serde::Serialize;

use crate::domain::meter_reading::{IntervalBlock, IntervalReading, MeterReading};

use super::common::{DateTimeIntervalDto, ESPI_XMLNS};

pub const METER_READING_ROOT: &str = "espi:MeterReading";
pub const INTERVAL_BLOCK_ROOT: &str = "espi:IntervalBlock";

/// ESPI MeterReading content payload. The reading type and interval
/// blocks are linked resources with their own entries, so the payload
/// itself is empty beyond the namespace declaration.
#[derive(Debug, Serialize)]
pub struct MeterReadingDto {
    #[serde(rename = "@xmlns:espi")]
    pub xmlns: &'static str,
}

impl MeterReadingDto {
    pub fn from_domain(_mr: &MeterReading) -> Self {
        Self { xmlns: ESPI_XMLNS }
    }
}

/// ESPI IntervalBlock content payload.
#[derive(Debug, Serialize)]
pub struct IntervalBlockDto {
    #[serde(rename = "@xmlns:espi")]
    pub xmlns: &'static str,
    /// Overall interval covered by the block's readings. Absent when the
    /// block is empty.
    #[serde(rename = "espi:interval", skip_serializing_if = "Option::is_none")]
    pub interval: Option<DateTimeIntervalDto>,
    #[serde(rename = "espi:IntervalReading")]
    pub readings: Vec<IntervalReadingDto>,
}

#[derive(Debug, Serialize)]
pub struct IntervalReadingDto {
    #[serde(rename = "espi:cost", skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
    #[serde(rename = "espi:timePeriod")]
    pub time_period: DateTimeIntervalDto,
    #[serde(rename = "espi:value")]
    pub value: i64,
    #[serde(
        rename = "espi:consumptionTier",
        skip_serializing_if = "Option::is_none"
    )]
    pub consumption_tier: Option<i16>,
    #[serde(rename = "espi:tou", skip_serializing_if = "Option::is_none")]
    pub tou: Option<i16>,
    #[serde(rename = "espi:cpp", skip_serializing_if = "Option::is_none")]
    pub cpp: Option<i16>,
    #[serde(rename = "espi:ReadingQuality", skip_serializing_if = "Option::is_none")]
    pub quality: Option<ReadingQualityDto>,
}

#[derive(Debug, Serialize)]
pub struct ReadingQualityDto {
    #[serde(rename = "espi:quality")]
    pub quality: i16,
}

impl IntervalBlockDto {
    pub fn from_domain(block: &IntervalBlock) -> Self {
        Self {
            xmlns: ESPI_XMLNS,
            interval: block
                .overall_interval()
                .map(DateTimeIntervalDto::from_domain),
            readings: block.readings.iter().map(reading_to_dto).collect(),
        }
    }
}

fn reading_to_dto(r: &IntervalReading) -> IntervalReadingDto {
    IntervalReadingDto {
        cost: r.cost,
        time_period: DateTimeIntervalDto::from_domain(r.time_period),
        value: r.value,
        consumption_tier: r.consumption_tier,
        tou: r.tou,
        cpp: r.cpp,
        quality: r.quality.map(|q| ReadingQualityDto {
            quality: q.code() as i16,
        }),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::DateTimeInterval;
    use crate::domain::Resource;
    use chrono::Utc;

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

    fn reading(start: i64, duration: i64) -> IntervalReading {
        IntervalReading {
            time_period: DateTimeInterval::new(start, duration),
            value: 42,
            cost: None,
            consumption_tier: None,
            tou: None,
            cpp: None,
            quality: None,
        }
    }

    #[test]
    fn interval_is_the_overall_span() {
        let dto = IntervalBlockDto::from_domain(&block(vec![reading(100, 50), reading(200, 10)]));
        let iv = dto.interval.unwrap();
        assert_eq!(iv.start, 100);
        assert_eq!(iv.duration, 110);
    }

    #[test]
    fn empty_block_has_absent_interval() {
        let dto = IntervalBlockDto::from_domain(&block(vec![]));
        assert!(dto.interval.is_none());
        assert!(dto.readings.is_empty());
    }
}
