//! RetailCustomer and CustomerAccount JSON DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::customer_account::{AccountNotification, CustomerAccount, Organisation};
use crate::domain::retail_customer::RetailCustomer;
use crate::domain::values::{ElectronicAddress, Status, StreetAddress, TelephoneNumber};
use crate::domain::Resource;

/// Shared resource envelope fields of the JSON family.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDto {
    /// Resource identity, derived from the canonical self href
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub published: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub self_href: String,
    pub up_href: String,
}

impl ResourceDto {
    pub fn from_domain(r: &Resource) -> Self {
        Self {
            id: r.id,
            description: r.description.clone(),
            published: r.published,
            updated: r.updated,
            self_href: r.self_href.clone(),
            up_href: r.up_href.clone(),
        }
    }
}

/// A customer of the data custodian.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "resource": {
        "id": "8f3edc15-7fbc-5f04-9f3a-2f1a3b6a7c01",
        "published": "2024-01-15T10:00:00Z",
        "updated": "2024-01-15T10:00:00Z",
        "selfHref": "/espi/1_1/resource/RetailCustomer/1",
        "upHref": "/espi/1_1/resource/RetailCustomer"
    },
    "username": "alan",
    "firstName": "Alan",
    "lastName": "Turing",
    "enabled": true,
    "role": "ROLE_USER"
}))]
pub struct RetailCustomerDto {
    pub resource: ResourceDto,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub enabled: bool,
    pub role: String,
}

impl RetailCustomerDto {
    pub fn from_domain(rc: &RetailCustomer) -> Self {
        Self {
            resource: ResourceDto::from_domain(&rc.resource),
            username: rc.username.clone(),
            first_name: rc.first_name.clone(),
            last_name: rc.last_name.clone(),
            enabled: rc.enabled,
            role: rc.role.clone(),
        }
    }
}

/// Billing account with its owned organisation and notification history.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAccountDto {
    pub resource: ResourceDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_customer_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// CustomerKind token, e.g. `residential`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_kind: Option<String>,
    /// SupplierKind token, e.g. `utility`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_bill: Option<String>,
    /// Hundred-thousandths of the account currency unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_bill_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_status: Option<StatusDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation: Option<OrganisationDto>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<AccountNotificationDto>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Seconds since the Unix epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl StatusDto {
    fn from_domain(s: &Status) -> Self {
        Self {
            value: s.value.clone(),
            date_time: s.date_time,
            reason: s.reason.clone(),
            remark: s.remark.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation_name: Option<String>,
    pub street_address: StreetAddressDto,
    pub postal_address: StreetAddressDto,
    pub phone1: TelephoneNumberDto,
    pub phone2: TelephoneNumberDto,
    pub electronic_address: ElectronicAddressDto,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StreetAddressDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_or_province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TelephoneNumberDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicAddressDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountNotificationDto {
    /// NotificationMethodKind token, e.g. `email`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Seconds since the Unix epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

impl CustomerAccountDto {
    pub fn from_domain(a: &CustomerAccount) -> Self {
        Self {
            resource: ResourceDto::from_domain(&a.resource),
            retail_customer_id: a.retail_customer_id,
            account_id: a.account_id.clone(),
            customer_kind: a.customer_kind.map(|k| k.code().to_string()),
            supplier_kind: a.supplier_kind.map(|k| k.code().to_string()),
            billing_cycle: a.billing_cycle.clone(),
            budget_bill: a.budget_bill.clone(),
            last_bill_amount: a.last_bill_amount,
            doc_status: a.doc_status.as_ref().map(StatusDto::from_domain),
            status: a.status.as_ref().map(StatusDto::from_domain),
            title: a.title.clone(),
            organisation: a.organisation.as_ref().map(organisation_to_dto),
            notifications: a.notifications.iter().map(notification_to_dto).collect(),
        }
    }
}

fn organisation_to_dto(o: &Organisation) -> OrganisationDto {
    OrganisationDto {
        organisation_name: o.organisation_name.clone(),
        street_address: street_to_dto(&o.street_address),
        postal_address: street_to_dto(&o.postal_address),
        phone1: phone_to_dto(&o.phone1),
        phone2: phone_to_dto(&o.phone2),
        electronic_address: email_to_dto(&o.electronic_address),
    }
}

fn street_to_dto(s: &StreetAddress) -> StreetAddressDto {
    StreetAddressDto {
        street_detail: s.street_detail.clone(),
        town_detail: s.town_detail.clone(),
        state_or_province: s.state_or_province.clone(),
        postal_code: s.postal_code.clone(),
        country: s.country.clone(),
    }
}

fn phone_to_dto(t: &TelephoneNumber) -> TelephoneNumberDto {
    TelephoneNumberDto {
        country_code: t.country_code.clone(),
        area_code: t.area_code.clone(),
        city_code: t.city_code.clone(),
        local_number: t.local_number.clone(),
        extension: t.extension.clone(),
    }
}

fn email_to_dto(e: &ElectronicAddress) -> ElectronicAddressDto {
    ElectronicAddressDto {
        email1: e.email1.clone(),
        email2: e.email2.clone(),
        web: e.web.clone(),
        radio: e.radio.clone(),
    }
}

fn notification_to_dto(n: &AccountNotification) -> AccountNotificationDto {
    AccountNotificationDto {
        method_kind: n.method_kind.map(|k| k.code().to_string()),
        note: n.note.clone(),
        time: n.time,
    }
}
