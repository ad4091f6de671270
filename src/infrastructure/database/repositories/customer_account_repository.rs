//! SeaORM implementation of CustomerAccountRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::codes::{CustomerKind, NotificationMethodKind, SupplierKind};
use crate::domain::customer_account::{
    AccountNotification, CustomerAccount, CustomerAccountRepository, Organisation,
};
use crate::domain::values::{ElectronicAddress, Status, StreetAddress, TelephoneNumber};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{
    account_notification, customer_account, organisation,
};

use super::{db_err, resource_from_columns};

pub struct SeaOrmCustomerAccountRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn status_from_columns(
    value: Option<String>,
    date_time: Option<i64>,
    reason: Option<String>,
    remark: Option<String>,
) -> Option<Status> {
    if value.is_none() && date_time.is_none() && reason.is_none() && remark.is_none() {
        return None;
    }
    Some(Status {
        value,
        date_time,
        reason,
        remark,
    })
}

fn organisation_to_domain(m: organisation::Model) -> Organisation {
    Organisation {
        organisation_name: m.organisation_name,
        street_address: StreetAddress {
            street_detail: m.sa_street_detail,
            town_detail: m.sa_town_detail,
            state_or_province: m.sa_state_or_province,
            postal_code: m.sa_postal_code,
            country: m.sa_country,
        },
        postal_address: StreetAddress {
            street_detail: m.pa_street_detail,
            town_detail: m.pa_town_detail,
            state_or_province: m.pa_state_or_province,
            postal_code: m.pa_postal_code,
            country: m.pa_country,
        },
        phone1: TelephoneNumber {
            country_code: m.p1_country_code,
            area_code: m.p1_area_code,
            city_code: m.p1_city_code,
            local_number: m.p1_local_number,
            extension: m.p1_extension,
        },
        phone2: TelephoneNumber {
            country_code: m.p2_country_code,
            area_code: m.p2_area_code,
            city_code: m.p2_city_code,
            local_number: m.p2_local_number,
            extension: m.p2_extension,
        },
        electronic_address: ElectronicAddress {
            email1: m.ea_email1,
            email2: m.ea_email2,
            web: m.ea_web,
            radio: m.ea_radio,
        },
    }
}

async fn load<C: ConnectionTrait>(
    conn: &C,
    m: customer_account::Model,
) -> DomainResult<CustomerAccount> {
    let organisation = organisation::Entity::find()
        .filter(organisation::Column::CustomerAccountId.eq(m.id))
        .one(conn)
        .await
        .map_err(db_err)?
        .map(organisation_to_domain);

    let notifications = account_notification::Entity::find()
        .filter(account_notification::Column::CustomerAccountId.eq(m.id))
        .order_by_asc(account_notification::Column::Id)
        .all(conn)
        .await
        .map_err(db_err)?
        .into_iter()
        .map(|n| {
            Ok(AccountNotification {
                method_kind: n
                    .method_kind
                    .as_deref()
                    .map(NotificationMethodKind::resolve)
                    .transpose()?,
                note: n.note,
                time: n.time,
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(CustomerAccount {
        resource: resource_from_columns(
            m.id,
            m.description,
            m.published,
            m.updated,
            m.self_href,
            m.up_href,
        ),
        retail_customer_id: m.retail_customer_id,
        account_id: m.account_id,
        customer_kind: m
            .customer_kind
            .as_deref()
            .map(CustomerKind::resolve)
            .transpose()?,
        supplier_kind: m
            .supplier_kind
            .as_deref()
            .map(SupplierKind::resolve)
            .transpose()?,
        billing_cycle: m.billing_cycle,
        budget_bill: m.budget_bill,
        last_bill_amount: m.last_bill_amount,
        doc_status: status_from_columns(
            m.doc_status_value,
            m.doc_status_date_time,
            m.doc_status_reason,
            m.doc_status_remark,
        ),
        status: status_from_columns(
            m.status_value,
            m.status_date_time,
            m.status_reason,
            m.status_remark,
        ),
        title: m.title,
        organisation,
        notifications,
    })
}

async fn insert<C: ConnectionTrait>(conn: &C, account: CustomerAccount) -> DomainResult<()> {
    let doc_status = account.doc_status.unwrap_or_default();
    let status = account.status.unwrap_or_default();

    let model = customer_account::ActiveModel {
        id: Set(account.resource.id),
        description: Set(account.resource.description),
        published: Set(account.resource.published),
        updated: Set(account.resource.updated),
        self_href: Set(account.resource.self_href),
        up_href: Set(account.resource.up_href),
        retail_customer_id: Set(account.retail_customer_id),
        account_id: Set(account.account_id),
        customer_kind: Set(account.customer_kind.map(|k| k.code().to_string())),
        supplier_kind: Set(account.supplier_kind.map(|k| k.code().to_string())),
        billing_cycle: Set(account.billing_cycle),
        budget_bill: Set(account.budget_bill),
        last_bill_amount: Set(account.last_bill_amount),
        title: Set(account.title),
        doc_status_value: Set(doc_status.value),
        doc_status_date_time: Set(doc_status.date_time),
        doc_status_reason: Set(doc_status.reason),
        doc_status_remark: Set(doc_status.remark),
        status_value: Set(status.value),
        status_date_time: Set(status.date_time),
        status_reason: Set(status.reason),
        status_remark: Set(status.remark),
    };
    let account_id = account.resource.id;
    model.insert(conn).await.map_err(db_err)?;

    if let Some(org) = account.organisation {
        let row = organisation::ActiveModel {
            id: NotSet,
            customer_account_id: Set(account_id),
            organisation_name: Set(org.organisation_name),
            sa_street_detail: Set(org.street_address.street_detail),
            sa_town_detail: Set(org.street_address.town_detail),
            sa_state_or_province: Set(org.street_address.state_or_province),
            sa_postal_code: Set(org.street_address.postal_code),
            sa_country: Set(org.street_address.country),
            pa_street_detail: Set(org.postal_address.street_detail),
            pa_town_detail: Set(org.postal_address.town_detail),
            pa_state_or_province: Set(org.postal_address.state_or_province),
            pa_postal_code: Set(org.postal_address.postal_code),
            pa_country: Set(org.postal_address.country),
            p1_country_code: Set(org.phone1.country_code),
            p1_area_code: Set(org.phone1.area_code),
            p1_city_code: Set(org.phone1.city_code),
            p1_local_number: Set(org.phone1.local_number),
            p1_extension: Set(org.phone1.extension),
            p2_country_code: Set(org.phone2.country_code),
            p2_area_code: Set(org.phone2.area_code),
            p2_city_code: Set(org.phone2.city_code),
            p2_local_number: Set(org.phone2.local_number),
            p2_extension: Set(org.phone2.extension),
            ea_email1: Set(org.electronic_address.email1),
            ea_email2: Set(org.electronic_address.email2),
            ea_web: Set(org.electronic_address.web),
            ea_radio: Set(org.electronic_address.radio),
        };
        row.insert(conn).await.map_err(db_err)?;
    }

    for n in account.notifications {
        let row = account_notification::ActiveModel {
            id: NotSet,
            customer_account_id: Set(account_id),
            method_kind: Set(n.method_kind.map(|k| k.code().to_string())),
            note: Set(n.note),
            time: Set(n.time),
        };
        row.insert(conn).await.map_err(db_err)?;
    }

    Ok(())
}

#[async_trait]
impl CustomerAccountRepository for SeaOrmCustomerAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<CustomerAccount>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let model = customer_account::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        let account = match model {
            Some(m) => Some(load(&txn, m).await?),
            None => None,
        };
        txn.commit().await.map_err(db_err)?;
        Ok(account)
    }

    async fn find_all(&self) -> DomainResult<Vec<CustomerAccount>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let models = customer_account::Entity::find()
            .order_by_asc(customer_account::Column::SelfHref)
            .all(&txn)
            .await
            .map_err(db_err)?;
        let mut accounts = Vec::with_capacity(models.len());
        for m in models {
            accounts.push(load(&txn, m).await?);
        }
        txn.commit().await.map_err(db_err)?;
        Ok(accounts)
    }

    async fn save(&self, account: CustomerAccount) -> DomainResult<()> {
        debug!("Saving customer account: {}", account.resource.id);
        let txn = self.db.begin().await.map_err(db_err)?;
        insert(&txn, account).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(())
    }
}
