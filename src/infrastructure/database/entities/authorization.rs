//! Authorization table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authorizations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(nullable)]
    pub description: Option<String>,
    pub published: DateTimeUtc,
    pub updated: DateTimeUtc,
    pub self_href: String,
    pub up_href: String,

    /// AuthorizationStatus code
    pub status: i32,

    // Period the holder may access, and period covered by the data
    #[sea_orm(nullable)]
    pub authorized_period_start: Option<i64>,
    #[sea_orm(nullable)]
    pub authorized_period_duration: Option<i64>,
    #[sea_orm(nullable)]
    pub published_period_start: Option<i64>,
    #[sea_orm(nullable)]
    pub published_period_duration: Option<i64>,

    #[sea_orm(nullable)]
    pub expires_at: Option<i64>,
    #[sea_orm(nullable)]
    pub scope: Option<String>,
    #[sea_orm(nullable)]
    pub access_token: Option<String>,
    #[sea_orm(nullable)]
    pub refresh_token: Option<String>,
    /// TokenType token
    #[sea_orm(nullable)]
    pub token_type: Option<String>,
    /// GrantType token
    #[sea_orm(nullable)]
    pub grant_type: Option<String>,
    #[sea_orm(nullable)]
    pub error: Option<String>,
    #[sea_orm(nullable)]
    pub error_description: Option<String>,
    #[sea_orm(nullable)]
    pub resource_uri: Option<String>,
    #[sea_orm(nullable)]
    pub authorization_uri: Option<String>,
    #[sea_orm(nullable)]
    pub third_party: Option<String>,

    #[sea_orm(nullable)]
    pub retail_customer_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub application_information_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
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
