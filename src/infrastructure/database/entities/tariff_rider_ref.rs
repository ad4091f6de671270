//! Tariff rider rows owned by a usage summary

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tariff_rider_refs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub usage_summary_id: Uuid,

    pub rider_type: String,
    /// EnrollmentStatus token
    pub enrollment_status: String,
    /// Seconds since the Unix epoch
    pub effective_date: i64,
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
