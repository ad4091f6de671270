//! CustomerAccount and Organisation domain entities

use uuid::Uuid;

use crate::domain::codes::{CustomerKind, NotificationMethodKind, SupplierKind};
use crate::domain::resource::{impl_identity_eq, Resource};
use crate::domain::values::{ElectronicAddress, Status, StreetAddress, TelephoneNumber};

pub const RESOURCE: &str = "CustomerAccount";

/// Billing account for a retail customer. Owns one organisation record and
/// its notification history.
#[derive(Debug, Clone)]
pub struct CustomerAccount {
    pub resource: Resource,
    /// Non-owning back-reference to the retail customer.
    pub retail_customer_id: Option<Uuid>,
    pub account_id: Option<String>,
    pub customer_kind: Option<CustomerKind>,
    /// Collapsed service-supplier relationship of the account.
    pub supplier_kind: Option<SupplierKind>,
    pub billing_cycle: Option<String>,
    pub budget_bill: Option<String>,
    /// Hundred-thousandths of the account currency unit.
    pub last_bill_amount: Option<i64>,
    /// Document status and account status, distinct per the CIM document
    /// shape.
    pub doc_status: Option<Status>,
    pub status: Option<Status>,
    pub title: Option<String>,
    /// Owned: destroyed with the account.
    pub organisation: Option<Organisation>,
    pub notifications: Vec<AccountNotification>,
}

impl_identity_eq!(CustomerAccount);

/// Organisation details owned by a customer account: two addresses, two
/// phone numbers, one electronic address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organisation {
    pub organisation_name: Option<String>,
    pub street_address: StreetAddress,
    pub postal_address: StreetAddress,
    pub phone1: TelephoneNumber,
    pub phone2: TelephoneNumber,
    pub electronic_address: ElectronicAddress,
}

/// One notification sent for this account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountNotification {
    pub method_kind: Option<NotificationMethodKind>,
    pub note: Option<String>,
    /// Seconds since the Unix epoch.
    pub time: Option<i64>,
}
