//! Organisation row owned by a customer account; contact value objects are
//! flattened into prefixed columns

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organisations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub customer_account_id: Uuid,

    #[sea_orm(nullable)]
    pub organisation_name: Option<String>,

    // Street address
    #[sea_orm(nullable)]
    pub sa_street_detail: Option<String>,
    #[sea_orm(nullable)]
    pub sa_town_detail: Option<String>,
    #[sea_orm(nullable)]
    pub sa_state_or_province: Option<String>,
    #[sea_orm(nullable)]
    pub sa_postal_code: Option<String>,
    #[sea_orm(nullable)]
    pub sa_country: Option<String>,

    // Postal address
    #[sea_orm(nullable)]
    pub pa_street_detail: Option<String>,
    #[sea_orm(nullable)]
    pub pa_town_detail: Option<String>,
    #[sea_orm(nullable)]
    pub pa_state_or_province: Option<String>,
    #[sea_orm(nullable)]
    pub pa_postal_code: Option<String>,
    #[sea_orm(nullable)]
    pub pa_country: Option<String>,

    // Phone 1
    #[sea_orm(nullable)]
    pub p1_country_code: Option<String>,
    #[sea_orm(nullable)]
    pub p1_area_code: Option<String>,
    #[sea_orm(nullable)]
    pub p1_city_code: Option<String>,
    #[sea_orm(nullable)]
    pub p1_local_number: Option<String>,
    #[sea_orm(nullable)]
    pub p1_extension: Option<String>,

    // Phone 2
    #[sea_orm(nullable)]
    pub p2_country_code: Option<String>,
    #[sea_orm(nullable)]
    pub p2_area_code: Option<String>,
    #[sea_orm(nullable)]
    pub p2_city_code: Option<String>,
    #[sea_orm(nullable)]
    pub p2_local_number: Option<String>,
    #[sea_orm(nullable)]
    pub p2_extension: Option<String>,

    // Electronic address
    #[sea_orm(nullable)]
    pub ea_email1: Option<String>,
    #[sea_orm(nullable)]
    pub ea_email2: Option<String>,
    #[sea_orm(nullable)]
    pub ea_web: Option<String>,
    #[sea_orm(nullable)]
    pub ea_radio: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer_account::Entity",
        from = "Column::CustomerAccountId",
        to = "super::customer_account::Column::Id"
    )]
    CustomerAccount,
}

impl Related<super::customer_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
