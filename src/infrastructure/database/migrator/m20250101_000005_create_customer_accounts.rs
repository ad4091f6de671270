//! Create customer_accounts, organisations and account_notifications tables

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_retail_customers::RetailCustomers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomerAccounts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CustomerAccounts::Description).string())
                    .col(
                        ColumnDef::new(CustomerAccounts::Published)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomerAccounts::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CustomerAccounts::SelfHref).string().not_null())
                    .col(ColumnDef::new(CustomerAccounts::UpHref).string().not_null())
                    .col(ColumnDef::new(CustomerAccounts::RetailCustomerId).uuid())
                    .col(ColumnDef::new(CustomerAccounts::AccountId).string())
                    .col(ColumnDef::new(CustomerAccounts::CustomerKind).string())
                    .col(ColumnDef::new(CustomerAccounts::SupplierKind).string())
                    .col(ColumnDef::new(CustomerAccounts::BillingCycle).string())
                    .col(ColumnDef::new(CustomerAccounts::BudgetBill).string())
                    .col(ColumnDef::new(CustomerAccounts::LastBillAmount).big_integer())
                    .col(ColumnDef::new(CustomerAccounts::Title).string())
                    .col(ColumnDef::new(CustomerAccounts::DocStatusValue).string())
                    .col(ColumnDef::new(CustomerAccounts::DocStatusDateTime).big_integer())
                    .col(ColumnDef::new(CustomerAccounts::DocStatusReason).string())
                    .col(ColumnDef::new(CustomerAccounts::DocStatusRemark).string())
                    .col(ColumnDef::new(CustomerAccounts::StatusValue).string())
                    .col(ColumnDef::new(CustomerAccounts::StatusDateTime).big_integer())
                    .col(ColumnDef::new(CustomerAccounts::StatusReason).string())
                    .col(ColumnDef::new(CustomerAccounts::StatusRemark).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_accounts_retail_customer")
                            .from(CustomerAccounts::Table, CustomerAccounts::RetailCustomerId)
                            .to(RetailCustomers::Table, RetailCustomers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Organisations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Organisations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Organisations::CustomerAccountId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Organisations::OrganisationName).string())
                    .col(ColumnDef::new(Organisations::SaStreetDetail).string())
                    .col(ColumnDef::new(Organisations::SaTownDetail).string())
                    .col(ColumnDef::new(Organisations::SaStateOrProvince).string())
                    .col(ColumnDef::new(Organisations::SaPostalCode).string())
                    .col(ColumnDef::new(Organisations::SaCountry).string())
                    .col(ColumnDef::new(Organisations::PaStreetDetail).string())
                    .col(ColumnDef::new(Organisations::PaTownDetail).string())
                    .col(ColumnDef::new(Organisations::PaStateOrProvince).string())
                    .col(ColumnDef::new(Organisations::PaPostalCode).string())
                    .col(ColumnDef::new(Organisations::PaCountry).string())
                    .col(ColumnDef::new(Organisations::P1CountryCode).string())
                    .col(ColumnDef::new(Organisations::P1AreaCode).string())
                    .col(ColumnDef::new(Organisations::P1CityCode).string())
                    .col(ColumnDef::new(Organisations::P1LocalNumber).string())
                    .col(ColumnDef::new(Organisations::P1Extension).string())
                    .col(ColumnDef::new(Organisations::P2CountryCode).string())
                    .col(ColumnDef::new(Organisations::P2AreaCode).string())
                    .col(ColumnDef::new(Organisations::P2CityCode).string())
                    .col(ColumnDef::new(Organisations::P2LocalNumber).string())
                    .col(ColumnDef::new(Organisations::P2Extension).string())
                    .col(ColumnDef::new(Organisations::EaEmail1).string())
                    .col(ColumnDef::new(Organisations::EaEmail2).string())
                    .col(ColumnDef::new(Organisations::EaWeb).string())
                    .col(ColumnDef::new(Organisations::EaRadio).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organisations_customer_account")
                            .from(Organisations::Table, Organisations::CustomerAccountId)
                            .to(CustomerAccounts::Table, CustomerAccounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccountNotifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccountNotifications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AccountNotifications::CustomerAccountId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AccountNotifications::MethodKind).string())
                    .col(ColumnDef::new(AccountNotifications::Note).string())
                    .col(ColumnDef::new(AccountNotifications::Time).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_notifications_customer_account")
                            .from(
                                AccountNotifications::Table,
                                AccountNotifications::CustomerAccountId,
                            )
                            .to(CustomerAccounts::Table, CustomerAccounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccountNotifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Organisations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CustomerAccounts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum CustomerAccounts {
    Table,
    Id,
    Description,
    Published,
    Updated,
    SelfHref,
    UpHref,
    RetailCustomerId,
    AccountId,
    CustomerKind,
    SupplierKind,
    BillingCycle,
    BudgetBill,
    LastBillAmount,
    Title,
    DocStatusValue,
    DocStatusDateTime,
    DocStatusReason,
    DocStatusRemark,
    StatusValue,
    StatusDateTime,
    StatusReason,
    StatusRemark,
}

#[derive(Iden)]
pub enum Organisations {
    Table,
    Id,
    CustomerAccountId,
    OrganisationName,
    SaStreetDetail,
    SaTownDetail,
    SaStateOrProvince,
    SaPostalCode,
    SaCountry,
    PaStreetDetail,
    PaTownDetail,
    PaStateOrProvince,
    PaPostalCode,
    PaCountry,
    P1CountryCode,
    P1AreaCode,
    P1CityCode,
    P1LocalNumber,
    P1Extension,
    P2CountryCode,
    P2AreaCode,
    P2CityCode,
    P2LocalNumber,
    P2Extension,
    EaEmail1,
    EaEmail2,
    EaWeb,
    EaRadio,
}

#[derive(Iden)]
pub enum AccountNotifications {
    Table,
    Id,
    CustomerAccountId,
    MethodKind,
    Note,
    Time,
}
