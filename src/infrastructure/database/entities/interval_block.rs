//! IntervalBlock table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "interval_blocks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(nullable)]
    pub description: Option<String>,
    pub published: DateTimeUtc,
    pub updated: DateTimeUtc,
    pub self_href: String,
    pub up_href: String,

    pub meter_reading_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meter_reading::Entity",
        from = "Column::MeterReadingId",
        to = "super::meter_reading::Column::Id"
    )]
    MeterReading,

    #[sea_orm(has_many = "super::interval_reading::Entity")]
    IntervalReadings,
}

impl Related<super::meter_reading::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeterReading.def()
    }
}

impl Related<super::interval_reading::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IntervalReadings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
