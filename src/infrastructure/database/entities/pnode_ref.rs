//! Pricing-node reference rows owned by a usage point

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pnode_refs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub usage_point_id: Uuid,

    #[sea_orm(nullable)]
    pub apnode_type: Option<String>,
    pub node_ref: String,
    #[sea_orm(nullable)]
    pub start_effective_date: Option<i64>,
    #[sea_orm(nullable)]
    pub end_effective_date: Option<i64>,
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
