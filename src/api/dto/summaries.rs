//! ElectricPowerQualitySummary and UsageSummary XML payload DTOs

use serde::Serialize;

use crate::domain::power_quality::ElectricPowerQualitySummary;
use crate::domain::usage_summary::{LineItem, TariffRiderRef, UsageSummary};

use super::common::{DateTimeIntervalDto, SummaryMeasurementDto, ESPI_XMLNS};

pub const POWER_QUALITY_ROOT: &str = "espi:ElectricPowerQualitySummary";
pub const USAGE_SUMMARY_ROOT: &str = "espi:UsageSummary";

/// ESPI ElectricPowerQualitySummary content payload.
#[derive(Debug, Serialize)]
pub struct ElectricPowerQualitySummaryDto {
    #[serde(rename = "@xmlns:espi")]
    pub xmlns: &'static str,
    #[serde(rename = "espi:flickerPlt", skip_serializing_if = "Option::is_none")]
    pub flicker_plt: Option<i64>,
    #[serde(rename = "espi:flickerPst", skip_serializing_if = "Option::is_none")]
    pub flicker_pst: Option<i64>,
    #[serde(
        rename = "espi:harmonicVoltage",
        skip_serializing_if = "Option::is_none"
    )]
    pub harmonic_voltage: Option<i64>,
    #[serde(
        rename = "espi:longInterruptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub long_interruptions: Option<i64>,
    #[serde(rename = "espi:mainsVoltage", skip_serializing_if = "Option::is_none")]
    pub mains_voltage: Option<i64>,
    #[serde(
        rename = "espi:measurementProtocol",
        skip_serializing_if = "Option::is_none"
    )]
    pub measurement_protocol: Option<i16>,
    #[serde(rename = "espi:powerFrequency", skip_serializing_if = "Option::is_none")]
    pub power_frequency: Option<i64>,
    #[serde(
        rename = "espi:rapidVoltageChanges",
        skip_serializing_if = "Option::is_none"
    )]
    pub rapid_voltage_changes: Option<i64>,
    #[serde(
        rename = "espi:shortInterruptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub short_interruptions: Option<i64>,
    #[serde(rename = "espi:summaryInterval")]
    pub summary_interval: DateTimeIntervalDto,
    #[serde(
        rename = "espi:supplyVoltageDips",
        skip_serializing_if = "Option::is_none"
    )]
    pub supply_voltage_dips: Option<i64>,
    #[serde(
        rename = "espi:supplyVoltageImbalance",
        skip_serializing_if = "Option::is_none"
    )]
    pub supply_voltage_imbalance: Option<i16>,
    #[serde(
        rename = "espi:supplyVoltageVariations",
        skip_serializing_if = "Option::is_none"
    )]
    pub supply_voltage_variations: Option<i64>,
    #[serde(
        rename = "espi:tempOvervoltages",
        skip_serializing_if = "Option::is_none"
    )]
    pub temp_overvoltages: Option<i64>,
}

impl ElectricPowerQualitySummaryDto {
    pub fn from_domain(s: &ElectricPowerQualitySummary) -> Self {
        Self {
            xmlns: ESPI_XMLNS,
            flicker_plt: s.flicker_plt,
            flicker_pst: s.flicker_pst,
            harmonic_voltage: s.harmonic_voltage,
            long_interruptions: s.long_interruptions,
            mains_voltage: s.mains_voltage,
            measurement_protocol: s.measurement_protocol,
            power_frequency: s.power_frequency,
            rapid_voltage_changes: s.rapid_voltage_changes,
            short_interruptions: s.short_interruptions,
            summary_interval: DateTimeIntervalDto::from_domain(s.summary_interval),
            supply_voltage_dips: s.supply_voltage_dips,
            supply_voltage_imbalance: s.supply_voltage_imbalance.map(|p| p.get()),
            supply_voltage_variations: s.supply_voltage_variations,
            temp_overvoltages: s.temp_overvoltages,
        }
    }
}

/// ESPI UsageSummary content payload with its line items and tariff rider
/// references inlined.
#[derive(Debug, Serialize)]
pub struct UsageSummaryDto {
    #[serde(rename = "@xmlns:espi")]
    pub xmlns: &'static str,
    #[serde(rename = "espi:billingPeriod", skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<DateTimeIntervalDto>,
    #[serde(rename = "espi:billLastPeriod", skip_serializing_if = "Option::is_none")]
    pub bill_last_period: Option<i64>,
    #[serde(rename = "espi:billToDate", skip_serializing_if = "Option::is_none")]
    pub bill_to_date: Option<i64>,
    #[serde(
        rename = "espi:costAdditionalLastPeriod",
        skip_serializing_if = "Option::is_none"
    )]
    pub cost_additional_last_period: Option<i64>,
    #[serde(
        rename = "espi:costAdditionalDetailLastPeriod",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub line_items: Vec<LineItemDto>,
    #[serde(rename = "espi:currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<i32>,
    #[serde(
        rename = "espi:overallConsumptionLastPeriod",
        skip_serializing_if = "Option::is_none"
    )]
    pub overall_consumption_last_period: Option<SummaryMeasurementDto>,
    #[serde(
        rename = "espi:currentBillingPeriodOverAllConsumption",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_billing_period_overall_consumption: Option<SummaryMeasurementDto>,
    #[serde(
        rename = "espi:currentDayNetConsumption",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_day_net_consumption: Option<SummaryMeasurementDto>,
    #[serde(
        rename = "espi:currentDayOverallConsumption",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_day_overall_consumption: Option<SummaryMeasurementDto>,
    #[serde(rename = "espi:peakDemand", skip_serializing_if = "Option::is_none")]
    pub peak_demand: Option<SummaryMeasurementDto>,
    #[serde(
        rename = "espi:previousDayNetConsumption",
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_day_net_consumption: Option<SummaryMeasurementDto>,
    #[serde(
        rename = "espi:qualityOfReading",
        skip_serializing_if = "Option::is_none"
    )]
    pub quality_of_reading: Option<i32>,
    #[serde(rename = "espi:readCycle", skip_serializing_if = "Option::is_none")]
    pub read_cycle: Option<String>,
    #[serde(rename = "espi:statusTimeStamp")]
    pub status_time_stamp: i64,
    #[serde(rename = "espi:tariffProfile", skip_serializing_if = "Option::is_none")]
    pub tariff_profile: Option<String>,
    #[serde(
        rename = "espi:tariffRiderRefs",
        skip_serializing_if = "Option::is_none"
    )]
    pub tariff_rider_refs: Option<TariffRiderRefsDto>,
    #[serde(
        rename = "espi:billingChargeSource",
        skip_serializing_if = "Option::is_none"
    )]
    pub billing_charge_source: Option<BillingChargeSourceDto>,
}

#[derive(Debug, Serialize)]
pub struct LineItemDto {
    #[serde(rename = "espi:amount")]
    pub amount: i64,
    #[serde(rename = "espi:rounding", skip_serializing_if = "Option::is_none")]
    pub rounding: Option<i64>,
    #[serde(rename = "espi:dateTime")]
    pub date_time: i64,
    #[serde(rename = "espi:note")]
    pub note: String,
    #[serde(rename = "espi:measurement", skip_serializing_if = "Option::is_none")]
    pub measurement: Option<SummaryMeasurementDto>,
}

#[derive(Debug, Serialize)]
pub struct TariffRiderRefsDto {
    #[serde(rename = "espi:tariffRiderRef")]
    pub refs: Vec<TariffRiderRefDto>,
}

#[derive(Debug, Serialize)]
pub struct TariffRiderRefDto {
    #[serde(rename = "espi:riderType")]
    pub rider_type: String,
    #[serde(rename = "espi:enrollmentStatus")]
    pub enrollment_status: String,
    #[serde(rename = "espi:effectiveDate")]
    pub effective_date: i64,
}

#[derive(Debug, Serialize)]
pub struct BillingChargeSourceDto {
    #[serde(rename = "espi:agencyName", skip_serializing_if = "Option::is_none")]
    pub agency_name: Option<String>,
}

impl UsageSummaryDto {
    pub fn from_domain(s: &UsageSummary) -> Self {
        Self {
            xmlns: ESPI_XMLNS,
            billing_period: s.billing_period.map(DateTimeIntervalDto::from_domain),
            bill_last_period: s.bill_last_period,
            bill_to_date: s.bill_to_date,
            cost_additional_last_period: s.cost_additional_last_period,
            line_items: s.line_items.iter().map(line_item_to_dto).collect(),
            currency: s.currency.map(|c| c.code()),
            overall_consumption_last_period: SummaryMeasurementDto::opt(
                s.overall_consumption_last_period.as_ref(),
            ),
            current_billing_period_overall_consumption: SummaryMeasurementDto::opt(
                s.current_billing_period_overall_consumption.as_ref(),
            ),
            current_day_net_consumption: SummaryMeasurementDto::opt(
                s.current_day_net_consumption.as_ref(),
            ),
            current_day_overall_consumption: SummaryMeasurementDto::opt(
                s.current_day_overall_consumption.as_ref(),
            ),
            peak_demand: SummaryMeasurementDto::opt(s.peak_demand.as_ref()),
            previous_day_net_consumption: SummaryMeasurementDto::opt(
                s.previous_day_net_consumption.as_ref(),
            ),
            quality_of_reading: s.quality_of_reading.map(|q| q.code()),
            read_cycle: s.read_cycle.clone(),
            status_time_stamp: s.status_time_stamp,
            tariff_profile: s.tariff_profile.clone(),
            tariff_rider_refs: if s.tariff_rider_refs.is_empty() {
                None
            } else {
                Some(TariffRiderRefsDto {
                    refs: s.tariff_rider_refs.iter().map(rider_to_dto).collect(),
                })
            },
            billing_charge_source: s.billing_charge_source.as_ref().map(|b| {
                BillingChargeSourceDto {
                    agency_name: b.agency_name.clone(),
                }
            }),
        }
    }
}

fn line_item_to_dto(li: &LineItem) -> LineItemDto {
    LineItemDto {
        amount: li.amount,
        rounding: li.rounding,
        date_time: li.date_time,
        note: li.note.clone(),
        measurement: SummaryMeasurementDto::opt(li.measurement.as_ref()),
    }
}

fn rider_to_dto(r: &TariffRiderRef) -> TariffRiderRefDto {
    TariffRiderRefDto {
        rider_type: r.rider_type.clone(),
        enrollment_status: r.enrollment_status.code().to_string(),
        effective_date: r.effective_date,
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codes::Currency;
    use crate::domain::values::DateTimeInterval;
    use crate::domain::Resource;
    use chrono::Utc;
    use uuid::Uuid;

    fn summary() -> UsageSummary {
        UsageSummary {
            resource: Resource::from_href(
                "/espi/1_1/resource/UsageSummary/1",
                "/espi/1_1/resource/UsageSummary",
                None,
                Utc::now(),
                Utc::now(),
            ),
            usage_point_id: Some(Uuid::nil()),
            billing_period: Some(DateTimeInterval::new(1_000, 2_592_000)),
            bill_last_period: Some(1_500_000),
            bill_to_date: None,
            cost_additional_last_period: None,
            currency: Some(Currency::Usd),
            overall_consumption_last_period: None,
            current_billing_period_overall_consumption: None,
            current_day_net_consumption: None,
            current_day_overall_consumption: None,
            peak_demand: None,
            previous_day_net_consumption: None,
            quality_of_reading: None,
            read_cycle: None,
            status_time_stamp: 1_700_000_000,
            tariff_profile: None,
            billing_charge_source: None,
            line_items: vec![],
            tariff_rider_refs: vec![],
        }
    }

    #[test]
    fn currency_projects_through_its_code() {
        let dto = UsageSummaryDto::from_domain(&summary());
        assert_eq!(dto.currency, Some(Currency::Usd.code()));
        assert_eq!(dto.bill_last_period, Some(1_500_000));
        assert!(dto.tariff_rider_refs.is_none());
    }
}
