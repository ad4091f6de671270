//! CustomerAccount table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer_accounts")]
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
    pub retail_customer_id: Option<Uuid>,

    #[sea_orm(nullable)]
    pub account_id: Option<String>,
    /// CustomerKind token
    #[sea_orm(nullable)]
    pub customer_kind: Option<String>,
    /// SupplierKind token
    #[sea_orm(nullable)]
    pub supplier_kind: Option<String>,
    #[sea_orm(nullable)]
    pub billing_cycle: Option<String>,
    #[sea_orm(nullable)]
    pub budget_bill: Option<String>,
    #[sea_orm(nullable)]
    pub last_bill_amount: Option<i64>,
    #[sea_orm(nullable)]
    pub title: Option<String>,

    // Document status (flattened Status)
    #[sea_orm(nullable)]
    pub doc_status_value: Option<String>,
    #[sea_orm(nullable)]
    pub doc_status_date_time: Option<i64>,
    #[sea_orm(nullable)]
    pub doc_status_reason: Option<String>,
    #[sea_orm(nullable)]
    pub doc_status_remark: Option<String>,

    // Account status (flattened Status)
    #[sea_orm(nullable)]
    pub status_value: Option<String>,
    #[sea_orm(nullable)]
    pub status_date_time: Option<i64>,
    #[sea_orm(nullable)]
    pub status_reason: Option<String>,
    #[sea_orm(nullable)]
    pub status_remark: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::retail_customer::Entity",
        from = "Column::RetailCustomerId",
        to = "super::retail_customer::Column::Id"
    )]
    RetailCustomer,

    #[sea_orm(has_one = "super::organisation::Entity")]
    Organisation,

    #[sea_orm(has_many = "super::account_notification::Entity")]
    Notifications,
}

impl Related<super::organisation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organisation.def()
    }
}

impl Related<super::account_notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
