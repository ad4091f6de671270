//! Subscription table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscriptions")]
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
    pub hashed_id: Option<String>,
    pub last_update: DateTimeUtc,

    #[sea_orm(nullable)]
    pub authorization_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub retail_customer_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub application_information_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::authorization::Entity",
        from = "Column::AuthorizationId",
        to = "super::authorization::Column::Id"
    )]
    Authorization,

    #[sea_orm(
        belongs_to = "super::retail_customer::Entity",
        from = "Column::RetailCustomerId",
        to = "super::retail_customer::Column::Id"
    )]
    RetailCustomer,

    #[sea_orm(
        belongs_to = "super::application_information::Entity",
        from = "Column::ApplicationInformationId",
        to = "super::application_information::Column::Id"
    )]
    ApplicationInformation,
}

impl Related<super::application_information::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationInformation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
