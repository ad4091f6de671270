//! Common API DTOs
//!
//! The JSON response envelope plus the ESPI XML fragments shared across
//! the usage-family payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::values::{DateTimeInterval, RationalNumber, SummaryMeasurement};

/// ESPI namespace carried on every usage-family payload root.
pub const ESPI_XMLNS: &str = "http://naesb.org/espi";

/// Standard JSON response envelope.
///
/// Every JSON endpoint returns data in this wrapper.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload; `null` on failure
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Time interval as epoch seconds plus duration, ESPI element order.
#[derive(Debug, Serialize)]
pub struct DateTimeIntervalDto {
    #[serde(rename = "espi:duration")]
    pub duration: i64,
    #[serde(rename = "espi:start")]
    pub start: i64,
}

impl DateTimeIntervalDto {
    pub fn from_domain(iv: DateTimeInterval) -> Self {
        Self {
            duration: iv.duration,
            start: iv.start,
        }
    }
}

/// Measured quantity with unit and scale codes.
#[derive(Debug, Serialize)]
pub struct SummaryMeasurementDto {
    #[serde(rename = "espi:powerOfTenMultiplier")]
    pub power_of_ten_multiplier: i32,
    #[serde(rename = "espi:timeStamp", skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<i64>,
    #[serde(rename = "espi:uom")]
    pub uom: i32,
    #[serde(rename = "espi:value")]
    pub value: i64,
    #[serde(rename = "espi:readingTypeRef", skip_serializing_if = "Option::is_none")]
    pub reading_type_ref: Option<String>,
}

impl SummaryMeasurementDto {
    pub fn from_domain(m: &SummaryMeasurement) -> Self {
        Self {
            power_of_ten_multiplier: m.power_of_ten_multiplier.code(),
            time_stamp: m.time_stamp,
            uom: m.uom.code(),
            value: m.value,
            reading_type_ref: m.reading_type_ref.clone(),
        }
    }

    pub fn opt(m: Option<&SummaryMeasurement>) -> Option<Self> {
        m.map(Self::from_domain)
    }
}

/// Numerator/denominator pair.
#[derive(Debug, Serialize)]
pub struct RationalNumberDto {
    #[serde(rename = "espi:numerator")]
    pub numerator: i64,
    #[serde(rename = "espi:denominator")]
    pub denominator: i64,
}

impl RationalNumberDto {
    pub fn from_domain(r: RationalNumber) -> Self {
        Self {
            numerator: r.numerator,
            denominator: r.denominator,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codes::{UnitMultiplier, UnitSymbol};

    #[test]
    fn envelope_success_and_error_shapes() {
        let ok = ApiResponse::success(5);
        assert!(ok.success);
        assert_eq!(ok.data, Some(5));
        assert!(ok.error.is_none());

        let err = ApiResponse::<()>::error("boom");
        assert!(!err.success);
        assert!(err.data.is_none());
        assert_eq!(err.error.as_deref(), Some("boom"));
    }

    #[test]
    fn measurement_projects_codes_not_names() {
        let m = SummaryMeasurement::new(9500, UnitSymbol::Watts, UnitMultiplier::Kilo);
        let dto = SummaryMeasurementDto::from_domain(&m);
        assert_eq!(dto.uom, UnitSymbol::Watts.code());
        assert_eq!(dto.power_of_ten_multiplier, UnitMultiplier::Kilo.code());
        assert!(dto.time_stamp.is_none());
    }
}
