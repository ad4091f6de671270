//! Leaf interval readings; rows carry no resource identity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "interval_readings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub interval_block_id: Uuid,

    /// Interval start, seconds since the Unix epoch
    pub start: i64,
    /// Interval length in seconds
    pub duration: i64,
    pub value: i64,

    #[sea_orm(nullable)]
    pub cost: Option<i64>,
    #[sea_orm(nullable)]
    pub consumption_tier: Option<i16>,
    #[sea_orm(nullable)]
    pub tou: Option<i16>,
    #[sea_orm(nullable)]
    pub cpp: Option<i16>,
    /// QualityOfReading code
    #[sea_orm(nullable)]
    pub quality: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::interval_block::Entity",
        from = "Column::IntervalBlockId",
        to = "super::interval_block::Column::Id"
    )]
    IntervalBlock,
}

impl Related<super::interval_block::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IntervalBlock.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
