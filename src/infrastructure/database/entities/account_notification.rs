//! Notification rows owned by a customer account

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account_notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub customer_account_id: Uuid,

    /// NotificationMethodKind token
    #[sea_orm(nullable)]
    pub method_kind: Option<String>,
    #[sea_orm(nullable)]
    pub note: Option<String>,
    /// Seconds since the Unix epoch
    #[sea_orm(nullable)]
    pub time: Option<i64>,
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
