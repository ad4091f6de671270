//! Cost detail rows owned by a usage summary

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "line_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub usage_summary_id: Uuid,

    /// Hundred-thousandths of the summary's currency unit
    pub amount: i64,
    #[sea_orm(nullable)]
    pub rounding: Option<i64>,
    /// Seconds since the Unix epoch
    pub date_time: i64,
    pub note: String,

    // Optional SummaryMeasurement (flattened)
    #[sea_orm(nullable)]
    pub measurement_multiplier: Option<i32>,
    #[sea_orm(nullable)]
    pub measurement_time_stamp: Option<i64>,
    #[sea_orm(nullable)]
    pub measurement_uom: Option<i32>,
    #[sea_orm(nullable)]
    pub measurement_value: Option<i64>,
    #[sea_orm(nullable)]
    pub measurement_ref: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usage_summary::Entity",
        from = "Column::UsageSummaryId",
        to = "super::usage_summary::Column::Id"
    )]
    UsageSummary,
}

impl Related<super::usage_summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsageSummary.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
