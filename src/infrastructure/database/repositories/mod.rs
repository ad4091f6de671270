//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider. Reads
//! that cross tables run inside one transaction so the returned subgraph
//! is a consistent snapshot. Stored enumeration codes are resolved on the
//! way out; a code no registry knows is surfaced as an error, never
//! silently defaulted.

pub mod application_information_repository;
pub mod authorization_repository;
pub mod customer_account_repository;
pub mod interval_block_repository;
pub mod meter_reading_repository;
pub mod power_quality_repository;
pub mod reading_type_repository;
pub mod repository_provider;
pub mod retail_customer_repository;
pub mod subscription_repository;
pub mod usage_point_repository;
pub mod usage_summary_repository;

pub use repository_provider::DatabaseRepositoryProvider;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::codes::{UnitMultiplier, UnitSymbol};
use crate::domain::values::SummaryMeasurement;
use crate::domain::{DomainError, DomainResult, Resource};

// ── Conversion helpers shared across repositories ───────────────

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// Rebuild the resource envelope from its stored columns. The stored id is
/// authoritative; it is not re-derived from the href here.
pub(crate) fn resource_from_columns(
    id: Uuid,
    description: Option<String>,
    published: DateTime<Utc>,
    updated: DateTime<Utc>,
    self_href: String,
    up_href: String,
) -> Resource {
    Resource {
        id,
        description,
        published,
        updated,
        self_href,
        up_href,
    }
}

/// Flattened SummaryMeasurement column group.
///
/// The group is considered present when the value column is set; unit and
/// multiplier fall back to their "not applicable" codes when their columns
/// are empty.
pub(crate) fn measurement_from_columns(
    multiplier: Option<i32>,
    time_stamp: Option<i64>,
    uom: Option<i32>,
    value: Option<i64>,
    reading_type_ref: Option<String>,
) -> DomainResult<Option<SummaryMeasurement>> {
    let value = match value {
        Some(v) => v,
        None => return Ok(None),
    };
    let power_of_ten_multiplier = match multiplier {
        Some(code) => UnitMultiplier::resolve(code)?,
        None => UnitMultiplier::None,
    };
    let uom = match uom {
        Some(code) => UnitSymbol::resolve(code)?,
        None => UnitSymbol::NotApplicable,
    };
    Ok(Some(SummaryMeasurement {
        power_of_ten_multiplier,
        time_stamp,
        uom,
        value,
        reading_type_ref,
    }))
}

/// Inverse of [`measurement_from_columns`], producing the five column
/// values in declaration order.
pub(crate) fn measurement_to_columns(
    m: Option<&SummaryMeasurement>,
) -> (
    Option<i32>,
    Option<i64>,
    Option<i32>,
    Option<i64>,
    Option<String>,
) {
    match m {
        Some(m) => (
            Some(m.power_of_ten_multiplier.code()),
            m.time_stamp,
            Some(m.uom.code()),
            Some(m.value),
            m.reading_type_ref.clone(),
        ),
        None => (None, None, None, None, None),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_absent_without_value() {
        let m = measurement_from_columns(Some(3), None, Some(72), None, None).unwrap();
        assert!(m.is_none());
    }

    #[test]
    fn measurement_round_trips_through_columns() {
        let m = SummaryMeasurement {
            power_of_ten_multiplier: UnitMultiplier::Kilo,
            time_stamp: Some(1_700_000_000),
            uom: UnitSymbol::WattHours,
            value: 1234,
            reading_type_ref: Some("/espi/1_1/resource/ReadingType/1".into()),
        };
        let (mult, ts, uom, value, rt) = measurement_to_columns(Some(&m));
        let back = measurement_from_columns(mult, ts, uom, value, rt)
            .unwrap()
            .unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn unknown_stored_uom_is_an_error() {
        let err = measurement_from_columns(None, None, Some(9999), Some(1), None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidCode { .. }));
    }
}
