//! ReadingType XML payload DTO

use serde::Serialize;

use crate::domain::reading_type::ReadingType;

use super::common::{RationalNumberDto, ESPI_XMLNS};

pub const ROOT: &str = "espi:ReadingType";

/// ESPI ReadingType content payload: the full bag of coded attributes,
/// every one optional and skipped when absent.
#[derive(Debug, Serialize)]
pub struct ReadingTypeDto {
    #[serde(rename = "@xmlns:espi")]
    pub xmlns: &'static str,
    #[serde(
        rename = "espi:accumulationBehaviour",
        skip_serializing_if = "Option::is_none"
    )]
    pub accumulation_behaviour: Option<i32>,
    #[serde(rename = "espi:commodity", skip_serializing_if = "Option::is_none")]
    pub commodity: Option<i32>,
    #[serde(
        rename = "espi:consumptionTier",
        skip_serializing_if = "Option::is_none"
    )]
    pub consumption_tier: Option<i16>,
    #[serde(rename = "espi:currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<i32>,
    #[serde(rename = "espi:dataQualifier", skip_serializing_if = "Option::is_none")]
    pub data_qualifier: Option<i32>,
    #[serde(rename = "espi:defaultQuality", skip_serializing_if = "Option::is_none")]
    pub default_quality: Option<i32>,
    #[serde(rename = "espi:flowDirection", skip_serializing_if = "Option::is_none")]
    pub flow_direction: Option<i32>,
    #[serde(rename = "espi:intervalLength", skip_serializing_if = "Option::is_none")]
    pub interval_length: Option<i64>,
    #[serde(rename = "espi:kind", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i32>,
    #[serde(rename = "espi:phase", skip_serializing_if = "Option::is_none")]
    pub phase: Option<i32>,
    #[serde(
        rename = "espi:powerOfTenMultiplier",
        skip_serializing_if = "Option::is_none"
    )]
    pub power_of_ten_multiplier: Option<i32>,
    #[serde(rename = "espi:timeAttribute", skip_serializing_if = "Option::is_none")]
    pub time_attribute: Option<i32>,
    #[serde(rename = "espi:uom", skip_serializing_if = "Option::is_none")]
    pub uom: Option<i32>,
    #[serde(rename = "espi:cpp", skip_serializing_if = "Option::is_none")]
    pub cpp: Option<i16>,
    #[serde(rename = "espi:tou", skip_serializing_if = "Option::is_none")]
    pub tou: Option<i16>,
    #[serde(rename = "espi:argument", skip_serializing_if = "Option::is_none")]
    pub argument: Option<RationalNumberDto>,
    #[serde(rename = "espi:interharmonic", skip_serializing_if = "Option::is_none")]
    pub interharmonic: Option<RationalNumberDto>,
}

impl ReadingTypeDto {
    pub fn from_domain(rt: &ReadingType) -> Self {
        Self {
            xmlns: ESPI_XMLNS,
            accumulation_behaviour: rt.accumulation_behaviour.map(|c| c.code()),
            commodity: rt.commodity.map(|c| c.code()),
            consumption_tier: rt.consumption_tier,
            currency: rt.currency.map(|c| c.code()),
            data_qualifier: rt.data_qualifier.map(|c| c.code()),
            default_quality: rt.default_quality.map(|c| c.code()),
            flow_direction: rt.flow_direction.map(|c| c.code()),
            interval_length: rt.interval_length,
            kind: rt.kind.map(|c| c.code()),
            phase: rt.phase.map(|c| c.code()),
            power_of_ten_multiplier: rt.power_of_ten_multiplier.map(|c| c.code()),
            time_attribute: rt.time_attribute.map(|c| c.code()),
            uom: rt.uom.map(|c| c.code()),
            cpp: rt.cpp,
            tou: rt.tou,
            argument: rt.argument.map(RationalNumberDto::from_domain),
            interharmonic: rt.interharmonic.map(RationalNumberDto::from_domain),
        }
    }
}
