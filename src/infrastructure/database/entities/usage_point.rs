//! UsagePoint table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usage_points")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(nullable)]
    pub description: Option<String>,
    pub published: DateTimeUtc,
    pub updated: DateTimeUtc,
    pub self_href: String,
    pub up_href: String,

    /// Opaque role bitfield, stored byte-for-byte
    #[sea_orm(nullable)]
    pub role_flags: Option<Vec<u8>>,

    /// ServiceCategory code
    pub service_category: i32,

    /// UsagePointConnectedKind token
    #[sea_orm(nullable)]
    pub connection_state: Option<String>,

    /// PhaseCode code
    #[sea_orm(nullable)]
    pub phase_code: Option<i32>,

    #[sea_orm(nullable)]
    pub status: Option<i16>,

    // ServiceDeliveryPoint (flattened)
    #[sea_orm(nullable)]
    pub sdp_name: Option<String>,
    #[sea_orm(nullable)]
    pub sdp_tariff_profile: Option<String>,
    #[sea_orm(nullable)]
    pub sdp_customer_agreement: Option<String>,

    // TimeConfiguration (flattened); rules are opaque blobs
    #[sea_orm(nullable)]
    pub ltp_dst_start_rule: Option<Vec<u8>>,
    #[sea_orm(nullable)]
    pub ltp_dst_end_rule: Option<Vec<u8>>,
    #[sea_orm(nullable)]
    pub ltp_dst_offset: Option<i64>,
    #[sea_orm(nullable)]
    pub ltp_tz_offset: Option<i64>,

    #[sea_orm(nullable)]
    pub retail_customer_id: Option<Uuid>,

    // SummaryMeasurement groups (flattened)
    #[sea_orm(nullable)]
    pub estimated_load_multiplier: Option<i32>,
    #[sea_orm(nullable)]
    pub estimated_load_time_stamp: Option<i64>,
    #[sea_orm(nullable)]
    pub estimated_load_uom: Option<i32>,
    #[sea_orm(nullable)]
    pub estimated_load_value: Option<i64>,
    #[sea_orm(nullable)]
    pub estimated_load_ref: Option<String>,

    #[sea_orm(nullable)]
    pub nominal_voltage_multiplier: Option<i32>,
    #[sea_orm(nullable)]
    pub nominal_voltage_time_stamp: Option<i64>,
    #[sea_orm(nullable)]
    pub nominal_voltage_uom: Option<i32>,
    #[sea_orm(nullable)]
    pub nominal_voltage_value: Option<i64>,
    #[sea_orm(nullable)]
    pub nominal_voltage_ref: Option<String>,

    #[sea_orm(nullable)]
    pub rated_current_multiplier: Option<i32>,
    #[sea_orm(nullable)]
    pub rated_current_time_stamp: Option<i64>,
    #[sea_orm(nullable)]
    pub rated_current_uom: Option<i32>,
    #[sea_orm(nullable)]
    pub rated_current_value: Option<i64>,
    #[sea_orm(nullable)]
    pub rated_current_ref: Option<String>,

    #[sea_orm(nullable)]
    pub rated_power_multiplier: Option<i32>,
    #[sea_orm(nullable)]
    pub rated_power_time_stamp: Option<i64>,
    #[sea_orm(nullable)]
    pub rated_power_uom: Option<i32>,
    #[sea_orm(nullable)]
    pub rated_power_value: Option<i64>,
    #[sea_orm(nullable)]
    pub rated_power_ref: Option<String>,

    // AcceptanceTest (flattened); present when at_success is set
    #[sea_orm(nullable)]
    pub at_date_time: Option<i64>,
    #[sea_orm(nullable)]
    pub at_success: Option<bool>,
    #[sea_orm(nullable)]
    pub at_kind: Option<String>,

    // LifecycleDates (flattened)
    #[sea_orm(nullable)]
    pub lc_manufactured_date: Option<i64>,
    #[sea_orm(nullable)]
    pub lc_purchase_date: Option<i64>,
    #[sea_orm(nullable)]
    pub lc_received_date: Option<i64>,
    #[sea_orm(nullable)]
    pub lc_installation_date: Option<i64>,
    #[sea_orm(nullable)]
    pub lc_removal_date: Option<i64>,
    #[sea_orm(nullable)]
    pub lc_retired_date: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::retail_customer::Entity",
        from = "Column::RetailCustomerId",
        to = "super::retail_customer::Column::Id"
    )]
    RetailCustomer,

    #[sea_orm(has_many = "super::meter_reading::Entity")]
    MeterReadings,

    #[sea_orm(has_many = "super::power_quality_summary::Entity")]
    PowerQualitySummaries,

    #[sea_orm(has_many = "super::usage_summary::Entity")]
    UsageSummaries,
}

impl Related<super::retail_customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RetailCustomer.def()
    }
}

impl Related<super::meter_reading::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeterReadings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
