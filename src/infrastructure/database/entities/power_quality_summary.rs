//! ElectricPowerQualitySummary table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "power_quality_summaries")]
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

    #[sea_orm(nullable)]
    pub flicker_plt: Option<i64>,
    #[sea_orm(nullable)]
    pub flicker_pst: Option<i64>,
    #[sea_orm(nullable)]
    pub harmonic_voltage: Option<i64>,
    #[sea_orm(nullable)]
    pub long_interruptions: Option<i64>,
    #[sea_orm(nullable)]
    pub mains_voltage: Option<i64>,
    #[sea_orm(nullable)]
    pub measurement_protocol: Option<i16>,
    #[sea_orm(nullable)]
    pub power_frequency: Option<i64>,
    #[sea_orm(nullable)]
    pub rapid_voltage_changes: Option<i64>,
    #[sea_orm(nullable)]
    pub short_interruptions: Option<i64>,

    // DateTimeInterval (flattened)
    pub summary_start: i64,
    pub summary_duration: i64,

    #[sea_orm(nullable)]
    pub supply_voltage_dips: Option<i64>,
    /// PerCent, validated on the way back into the domain
    #[sea_orm(nullable)]
    pub supply_voltage_imbalance: Option<i16>,
    #[sea_orm(nullable)]
    pub supply_voltage_variations: Option<i64>,
    #[sea_orm(nullable)]
    pub temp_overvoltages: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usage_point::Entity",
        from = "Column::UsagePointId",
        to = "super::usage_point::Column::Id"
    )]
    UsagePoint,
}

impl Related<super::usage_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsagePoint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
