//! MeterReading table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meter_readings")]
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
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usage_point::Entity",
        from = "Column::UsagePointId",
        to = "super::usage_point::Column::Id"
    )]
    UsagePoint,

    #[sea_orm(has_many = "super::interval_block::Entity")]
    IntervalBlocks,

    #[sea_orm(has_one = "super::reading_type::Entity")]
    ReadingType,
}

impl Related<super::usage_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsagePoint.def()
    }
}

impl Related<super::interval_block::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IntervalBlocks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
