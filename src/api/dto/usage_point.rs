//! UsagePoint XML payload DTOs

use serde::Serialize;

use crate::domain::usage_point::{
    AggregateNodeRef, PnodeRef, ServiceDeliveryPoint, TimeConfiguration, UsagePoint,
};

use super::common::{SummaryMeasurementDto, ESPI_XMLNS};

pub const ROOT: &str = "espi:UsagePoint";

/// ESPI UsagePoint content payload. Child resources are served from their
/// own collections, not inlined here; only the embedded value objects
/// travel with the point.
#[derive(Debug, Serialize)]
pub struct UsagePointDto {
    #[serde(rename = "@xmlns:espi")]
    pub xmlns: &'static str,
    /// Hex-encoded role bitfield, passed through byte-for-byte.
    #[serde(rename = "espi:roleFlags", skip_serializing_if = "Option::is_none")]
    pub role_flags: Option<String>,
    #[serde(rename = "espi:ServiceCategory")]
    pub service_category: ServiceCategoryDto,
    #[serde(rename = "espi:status", skip_serializing_if = "Option::is_none")]
    pub status: Option<i16>,
    #[serde(rename = "espi:connectionState", skip_serializing_if = "Option::is_none")]
    pub connection_state: Option<String>,
    #[serde(rename = "espi:phaseCode", skip_serializing_if = "Option::is_none")]
    pub phase_code: Option<i32>,
    #[serde(
        rename = "espi:ServiceDeliveryPoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_delivery_point: Option<ServiceDeliveryPointDto>,
    #[serde(
        rename = "espi:localTimeParameters",
        skip_serializing_if = "Option::is_none"
    )]
    pub local_time_parameters: Option<TimeConfigurationDto>,
    #[serde(rename = "espi:estimatedLoad", skip_serializing_if = "Option::is_none")]
    pub estimated_load: Option<SummaryMeasurementDto>,
    #[serde(
        rename = "espi:nominalServiceVoltage",
        skip_serializing_if = "Option::is_none"
    )]
    pub nominal_service_voltage: Option<SummaryMeasurementDto>,
    #[serde(rename = "espi:ratedCurrent", skip_serializing_if = "Option::is_none")]
    pub rated_current: Option<SummaryMeasurementDto>,
    #[serde(rename = "espi:ratedPower", skip_serializing_if = "Option::is_none")]
    pub rated_power: Option<SummaryMeasurementDto>,
    #[serde(rename = "espi:acceptanceTest", skip_serializing_if = "Option::is_none")]
    pub acceptance_test: Option<AcceptanceTestDto>,
    #[serde(
        rename = "espi:manufacturedDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub manufactured_date: Option<i64>,
    #[serde(rename = "espi:purchaseDate", skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<i64>,
    #[serde(rename = "espi:receivedDate", skip_serializing_if = "Option::is_none")]
    pub received_date: Option<i64>,
    #[serde(
        rename = "espi:installationDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub installation_date: Option<i64>,
    #[serde(rename = "espi:removalDate", skip_serializing_if = "Option::is_none")]
    pub removal_date: Option<i64>,
    #[serde(rename = "espi:retiredDate", skip_serializing_if = "Option::is_none")]
    pub retired_date: Option<i64>,
    #[serde(rename = "espi:pnodeRefs", skip_serializing_if = "Option::is_none")]
    pub pnode_refs: Option<PnodeRefsDto>,
    #[serde(
        rename = "espi:aggregatedNodeRefs",
        skip_serializing_if = "Option::is_none"
    )]
    pub aggregate_node_refs: Option<AggregateNodeRefsDto>,
}

#[derive(Debug, Serialize)]
pub struct ServiceCategoryDto {
    #[serde(rename = "espi:kind")]
    pub kind: i32,
}

#[derive(Debug, Serialize)]
pub struct ServiceDeliveryPointDto {
    #[serde(rename = "espi:name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "espi:tariffProfile", skip_serializing_if = "Option::is_none")]
    pub tariff_profile: Option<String>,
    #[serde(
        rename = "espi:customerAgreement",
        skip_serializing_if = "Option::is_none"
    )]
    pub customer_agreement: Option<String>,
}

/// DST rules are opaque byte blobs; they cross the wire hex encoded.
#[derive(Debug, Serialize)]
pub struct TimeConfigurationDto {
    #[serde(rename = "espi:dstEndRule")]
    pub dst_end_rule: String,
    #[serde(rename = "espi:dstOffset")]
    pub dst_offset: i64,
    #[serde(rename = "espi:dstStartRule")]
    pub dst_start_rule: String,
    #[serde(rename = "espi:tzOffset")]
    pub tz_offset: i64,
}

#[derive(Debug, Serialize)]
pub struct AcceptanceTestDto {
    #[serde(rename = "espi:dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<i64>,
    #[serde(rename = "espi:success")]
    pub success: bool,
    #[serde(rename = "espi:type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PnodeRefsDto {
    #[serde(rename = "espi:pnodeRef")]
    pub refs: Vec<PnodeRefDto>,
}

#[derive(Debug, Serialize)]
pub struct PnodeRefDto {
    #[serde(rename = "espi:apnodeType", skip_serializing_if = "Option::is_none")]
    pub apnode_type: Option<String>,
    #[serde(rename = "espi:ref")]
    pub node_ref: String,
    #[serde(
        rename = "espi:startEffectiveDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_effective_date: Option<i64>,
    #[serde(
        rename = "espi:endEffectiveDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_effective_date: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct AggregateNodeRefsDto {
    #[serde(rename = "espi:aggregatedNodeRef")]
    pub refs: Vec<AggregateNodeRefDto>,
}

#[derive(Debug, Serialize)]
pub struct AggregateNodeRefDto {
    #[serde(rename = "espi:anodeType", skip_serializing_if = "Option::is_none")]
    pub anode_type: Option<String>,
    #[serde(rename = "espi:ref")]
    pub node_ref: String,
    #[serde(
        rename = "espi:startEffectiveDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_effective_date: Option<i64>,
    #[serde(
        rename = "espi:endEffectiveDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_effective_date: Option<i64>,
}

impl UsagePointDto {
    pub fn from_domain(up: &UsagePoint) -> Self {
        let lc = up.lifecycle.clone().unwrap_or_default();
        Self {
            xmlns: ESPI_XMLNS,
            role_flags: up.role_flags.as_deref().map(hex::encode),
            service_category: ServiceCategoryDto {
                kind: up.service_category.code(),
            },
            status: up.status,
            connection_state: up.connection_state.map(|c| c.code().to_string()),
            phase_code: up.phase_code.map(|p| p.code()),
            service_delivery_point: up.service_delivery_point.as_ref().map(sdp_to_dto),
            local_time_parameters: up.local_time_parameters.as_ref().map(time_config_to_dto),
            estimated_load: SummaryMeasurementDto::opt(up.estimated_load.as_ref()),
            nominal_service_voltage: SummaryMeasurementDto::opt(
                up.nominal_service_voltage.as_ref(),
            ),
            rated_current: SummaryMeasurementDto::opt(up.rated_current.as_ref()),
            rated_power: SummaryMeasurementDto::opt(up.rated_power.as_ref()),
            acceptance_test: up.acceptance_test.as_ref().map(|at| AcceptanceTestDto {
                date_time: at.date_time,
                success: at.success,
                kind: at.kind.clone(),
            }),
            manufactured_date: lc.manufactured_date,
            purchase_date: lc.purchase_date,
            received_date: lc.received_date,
            installation_date: lc.installation_date,
            removal_date: lc.removal_date,
            retired_date: lc.retired_date,
            pnode_refs: if up.pnode_refs.is_empty() {
                None
            } else {
                Some(PnodeRefsDto {
                    refs: up.pnode_refs.iter().map(pnode_to_dto).collect(),
                })
            },
            aggregate_node_refs: if up.aggregate_node_refs.is_empty() {
                None
            } else {
                Some(AggregateNodeRefsDto {
                    refs: up.aggregate_node_refs.iter().map(anode_to_dto).collect(),
                })
            },
        }
    }
}

fn sdp_to_dto(sdp: &ServiceDeliveryPoint) -> ServiceDeliveryPointDto {
    ServiceDeliveryPointDto {
        name: sdp.name.clone(),
        tariff_profile: sdp.tariff_profile.clone(),
        customer_agreement: sdp.customer_agreement.clone(),
    }
}

fn time_config_to_dto(tc: &TimeConfiguration) -> TimeConfigurationDto {
    TimeConfigurationDto {
        dst_end_rule: hex::encode(&tc.dst_end_rule),
        dst_offset: tc.dst_offset,
        dst_start_rule: hex::encode(&tc.dst_start_rule),
        tz_offset: tc.tz_offset,
    }
}

fn pnode_to_dto(p: &PnodeRef) -> PnodeRefDto {
    PnodeRefDto {
        apnode_type: p.apnode_type.clone(),
        node_ref: p.node_ref.clone(),
        start_effective_date: p.start_effective_date,
        end_effective_date: p.end_effective_date,
    }
}

fn anode_to_dto(a: &AggregateNodeRef) -> AggregateNodeRefDto {
    AggregateNodeRefDto {
        anode_type: a.anode_type.clone(),
        node_ref: a.node_ref.clone(),
        start_effective_date: a.start_effective_date,
        end_effective_date: a.end_effective_date,
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codes::ServiceKind;
    use crate::domain::usage_point::UsagePoint;
    use crate::domain::Resource;
    use chrono::Utc;

    fn point() -> UsagePoint {
        UsagePoint {
            resource: Resource::from_href(
                "/espi/1_1/resource/UsagePoint/1",
                "/espi/1_1/resource/UsagePoint",
                None,
                Utc::now(),
                Utc::now(),
            ),
            role_flags: Some(vec![0x0d, 0x07]),
            service_category: ServiceKind::Electricity,
            connection_state: None,
            phase_code: None,
            status: None,
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
    fn role_flags_cross_the_wire_hex_encoded() {
        let dto = UsagePointDto::from_domain(&point());
        assert_eq!(dto.role_flags.as_deref(), Some("0d07"));
    }

    #[test]
    fn absent_branches_stay_absent() {
        let dto = UsagePointDto::from_domain(&point());
        assert!(dto.service_delivery_point.is_none());
        assert!(dto.estimated_load.is_none());
        assert!(dto.pnode_refs.is_none());
        assert_eq!(dto.service_category.kind, ServiceKind::Electricity.code());
    }
}
