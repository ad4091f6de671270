//! UsageSummary table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usage_summaries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(nullable)]
    pub description: Option<String>,
    pub published: DateTimeUtc,
    pub updated: DateTimeUtc,
    pub self_href: String,
    pub up_href: String,

    pub usage_point_id: Uuid,

    // Billing period (flattened DateTimeInterval)
    #[sea_orm(nullable)]
    pub billing_period_start: Option<i64>,
    #[sea_orm(nullable)]
    pub billing_period_duration: Option<i64>,

    /// Monetary amounts in hundred-thousandths of the currency unit
    #[sea_orm(nullable)]
    pub bill_last_period: Option<i64>,
    #[sea_orm(nullable)]
    pub bill_to_date: Option<i64>,
    #[sea_orm(nullable)]
    pub cost_additional_last_period: Option<i64>,

    /// ISO 4217 numeric code
    #[sea_orm(nullable)]
    pub currency: Option<i32>,

    // SummaryMeasurement groups (flattened)
    #[sea_orm(nullable)]
    pub overall_last_period_multiplier: Option<i32>,
    #[sea_orm(nullable)]
    pub overall_last_period_time_stamp: Option<i64>,
    #[sea_orm(nullable)]
    pub overall_last_period_uom: Option<i32>,
    #[sea_orm(nullable)]
    pub overall_last_period_value: Option<i64>,
    #[sea_orm(nullable)]
    pub overall_last_period_ref: Option<String>,

    #[sea_orm(nullable)]
    pub current_period_multiplier: Option<i32>,
    #[sea_orm(nullable)]
    pub current_period_time_stamp: Option<i64>,
    #[sea_orm(nullable)]
    pub current_period_uom: Option<i32>,
    #[sea_orm(nullable)]
    pub current_period_value: Option<i64>,
    #[sea_orm(nullable)]
    pub current_period_ref: Option<String>,

    #[sea_orm(nullable)]
    pub current_day_net_multiplier: Option<i32>,
    #[sea_orm(nullable)]
    pub current_day_net_time_stamp: Option<i64>,
    #[sea_orm(nullable)]
    pub current_day_net_uom: Option<i32>,
    #[sea_orm(nullable)]
    pub current_day_net_value: Option<i64>,
    #[sea_orm(nullable)]
    pub current_day_net_ref: Option<String>,

    #[sea_orm(nullable)]
    pub current_day_overall_multiplier: Option<i32>,
    #[sea_orm(nullable)]
    pub current_day_overall_time_stamp: Option<i64>,
    #[sea_orm(nullable)]
    pub current_day_overall_uom: Option<i32>,
    #[sea_orm(nullable)]
    pub current_day_overall_value: Option<i64>,
    #[sea_orm(nullable)]
    pub current_day_overall_ref: Option<String>,

    #[sea_orm(nullable)]
    pub peak_demand_multiplier: Option<i32>,
    #[sea_orm(nullable)]
    pub peak_demand_time_stamp: Option<i64>,
    #[sea_orm(nullable)]
    pub peak_demand_uom: Option<i32>,
    #[sea_orm(nullable)]
    pub peak_demand_value: Option<i64>,
    #[sea_orm(nullable)]
    pub peak_demand_ref: Option<String>,

    #[sea_orm(nullable)]
    pub previous_day_net_multiplier: Option<i32>,
    #[sea_orm(nullable)]
    pub previous_day_net_time_stamp: Option<i64>,
    #[sea_orm(nullable)]
    pub previous_day_net_uom: Option<i32>,
    #[sea_orm(nullable)]
    pub previous_day_net_value: Option<i64>,
    #[sea_orm(nullable)]
    pub previous_day_net_ref: Option<String>,

    /// QualityOfReading code
    #[sea_orm(nullable)]
    pub quality_of_reading: Option<i32>,

    #[sea_orm(nullable)]
    pub read_cycle: Option<String>,

    /// Seconds since the Unix epoch
    pub status_time_stamp: i64,

    #[sea_orm(nullable)]
    pub tariff_profile: Option<String>,

    // BillingChargeSource (flattened)
    #[sea_orm(nullable)]
    pub bcs_agency_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usage_point::Entity",
        from = "Column::UsagePointId",
        to = "super::usage_point::Column::Id"
    )]
    UsagePoint,

    #[sea_orm(has_many = "super::line_item::Entity")]
    LineItems,

    #[sea_orm(has_many = "super::tariff_rider_ref::Entity")]
    TariffRiderRefs,
}

impl Related<super::usage_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsagePoint.def()
    }
}

impl Related<super::line_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
