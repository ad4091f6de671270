//! ApplicationInformation table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "application_information")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(nullable)]
    pub description: Option<String>,
    pub published: DateTimeUtc,
    pub updated: DateTimeUtc,
    pub self_href: String,
    pub up_href: String,

    #[sea_orm(unique)]
    pub client_id: String,
    #[sea_orm(nullable)]
    pub client_secret: Option<String>,
    #[sea_orm(nullable)]
    pub client_name: Option<String>,
    #[sea_orm(nullable)]
    pub client_id_issued_at: Option<i64>,
    #[sea_orm(nullable)]
    pub client_secret_expires_at: Option<i64>,
    #[sea_orm(nullable)]
    pub third_party_application_description: Option<String>,
    #[sea_orm(nullable)]
    pub third_party_notify_uri: Option<String>,
    #[sea_orm(nullable)]
    pub redirect_uri: Option<String>,
    #[sea_orm(nullable)]
    pub token_endpoint_auth_method: Option<String>,
    #[sea_orm(nullable)]
    pub scope: Option<String>,
    /// Space separated GrantType tokens
    #[sea_orm(nullable)]
    pub grant_types: Option<String>,
    /// TokenType token
    #[sea_orm(nullable)]
    pub token_type: Option<String>,
    #[sea_orm(nullable)]
    pub authorization_server_uri: Option<String>,
    #[sea_orm(nullable)]
    pub authorization_server_authorization_endpoint: Option<String>,
    #[sea_orm(nullable)]
    pub authorization_server_token_endpoint: Option<String>,
    #[sea_orm(nullable)]
    pub data_custodian_id: Option<String>,
    #[sea_orm(nullable)]
    pub data_custodian_resource_endpoint: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::authorization::Entity")]
    Authorizations,

    #[sea_orm(has_many = "super::subscription::Entity")]
    Subscriptions,
}

impl Related<super::authorization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Authorizations.def()
    }
}

impl Related<super::subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscriptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
