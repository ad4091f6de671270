//! ReadingType table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reading_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(nullable)]
    pub description: Option<String>,
    pub published: DateTimeUtc,
    pub updated: DateTimeUtc,
    pub self_href: String,
    pub up_href: String,

    #[sea_orm(nullable)]
    pub meter_reading_id: Option<Uuid>,

    // Coded attributes, stored as external codes
    #[sea_orm(nullable)]
    pub accumulation_behaviour: Option<i32>,
    #[sea_orm(nullable)]
    pub commodity: Option<i32>,
    #[sea_orm(nullable)]
    pub consumption_tier: Option<i16>,
    #[sea_orm(nullable)]
    pub currency: Option<i32>,
    #[sea_orm(nullable)]
    pub data_qualifier: Option<i32>,
    #[sea_orm(nullable)]
    pub default_quality: Option<i32>,
    #[sea_orm(nullable)]
    pub flow_direction: Option<i32>,
    #[sea_orm(nullable)]
    pub interval_length: Option<i64>,
    #[sea_orm(nullable)]
    pub kind: Option<i32>,
    #[sea_orm(nullable)]
    pub phase: Option<i32>,
    #[sea_orm(nullable)]
    pub power_of_ten_multiplier: Option<i32>,
    #[sea_orm(nullable)]
    pub time_attribute: Option<i32>,
    #[sea_orm(nullable)]
    pub uom: Option<i32>,
    #[sea_orm(nullable)]
    pub cpp: Option<i16>,
    #[sea_orm(nullable)]
    pub tou: Option<i16>,

    // RationalNumber pairs (flattened)
    #[sea_orm(nullable)]
    pub argument_numerator: Option<i64>,
    #[sea_orm(nullable)]
    pub argument_denominator: Option<i64>,
    #[sea_orm(nullable)]
    pub interharmonic_numerator: Option<i64>,
    #[sea_orm(nullable)]
    pub interharmonic_denominator: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meter_reading::Entity",
        from = "Column::MeterReadingId",
        to = "super::meter_reading::Column::Id"
    )]
    MeterReading,
}

impl Related<super::meter_reading::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeterReading.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
