//! Create application_information, authorizations and subscriptions tables

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
                    .table(ApplicationInformation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApplicationInformation::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ApplicationInformation::Description).string())
                    .col(
                        ColumnDef::new(ApplicationInformation::Published)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApplicationInformation::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApplicationInformation::SelfHref)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ApplicationInformation::UpHref).string().not_null())
                    .col(
                        ColumnDef::new(ApplicationInformation::ClientId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ApplicationInformation::ClientSecret).string())
                    .col(ColumnDef::new(ApplicationInformation::ClientName).string())
                    .col(
                        ColumnDef::new(ApplicationInformation::ClientIdIssuedAt)
                            .big_integer(),
                    )
                    .col(
                        ColumnDef::new(ApplicationInformation::ClientSecretExpiresAt)
                            .big_integer(),
                    )
                    .col(
                        ColumnDef::new(
                            ApplicationInformation::ThirdPartyApplicationDescription,
                        )
                        .string(),
                    )
                    .col(ColumnDef::new(ApplicationInformation::ThirdPartyNotifyUri).string())
                    .col(ColumnDef::new(ApplicationInformation::RedirectUri).string())
                    .col(
                        ColumnDef::new(ApplicationInformation::TokenEndpointAuthMethod)
                            .string(),
                    )
                    .col(ColumnDef::new(ApplicationInformation::Scope).string())
                    .col(ColumnDef::new(ApplicationInformation::GrantTypes).string())
                    .col(ColumnDef::new(ApplicationInformation::TokenType).string())
                    .col(
                        ColumnDef::new(ApplicationInformation::AuthorizationServerUri)
                            .string(),
                    )
                    .col(
                        ColumnDef::new(
                            ApplicationInformation::AuthorizationServerAuthorizationEndpoint,
                        )
                        .string(),
                    )
                    .col(
                        ColumnDef::new(
                            ApplicationInformation::AuthorizationServerTokenEndpoint,
                        )
                        .string(),
                    )
                    .col(ColumnDef::new(ApplicationInformation::DataCustodianId).string())
                    .col(
                        ColumnDef::new(
                            ApplicationInformation::DataCustodianResourceEndpoint,
                        )
                        .string(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Authorizations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Authorizations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Authorizations::Description).string())
                    .col(
                        ColumnDef::new(Authorizations::Published)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Authorizations::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Authorizations::SelfHref).string().not_null())
                    .col(ColumnDef::new(Authorizations::UpHref).string().not_null())
                    .col(ColumnDef::new(Authorizations::Status).integer().not_null())
                    .col(ColumnDef::new(Authorizations::AuthorizedPeriodStart).big_integer())
                    .col(
                        ColumnDef::new(Authorizations::AuthorizedPeriodDuration)
                            .big_integer(),
                    )
                    .col(ColumnDef::new(Authorizations::PublishedPeriodStart).big_integer())
                    .col(
                        ColumnDef::new(Authorizations::PublishedPeriodDuration)
                            .big_integer(),
                    )
                    .col(ColumnDef::new(Authorizations::ExpiresAt).big_integer())
                    .col(ColumnDef::new(Authorizations::Scope).string())
                    .col(ColumnDef::new(Authorizations::AccessToken).string())
                    .col(ColumnDef::new(Authorizations::RefreshToken).string())
                    .col(ColumnDef::new(Authorizations::TokenType).string())
                    .col(ColumnDef::new(Authorizations::GrantType).string())
                    .col(ColumnDef::new(Authorizations::Error).string())
                    .col(ColumnDef::new(Authorizations::ErrorDescription).string())
                    .col(ColumnDef::new(Authorizations::ResourceUri).string())
                    .col(ColumnDef::new(Authorizations::AuthorizationUri).string())
                    .col(ColumnDef::new(Authorizations::ThirdParty).string())
                    .col(ColumnDef::new(Authorizations::RetailCustomerId).uuid())
                    .col(ColumnDef::new(Authorizations::ApplicationInformationId).uuid())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_authorizations_retail_customer")
                            .from(Authorizations::Table, Authorizations::RetailCustomerId)
                            .to(RetailCustomers::Table, RetailCustomers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_authorizations_application_information")
                            .from(
                                Authorizations::Table,
                                Authorizations::ApplicationInformationId,
                            )
                            .to(ApplicationInformation::Table, ApplicationInformation::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subscriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subscriptions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subscriptions::Description).string())
                    .col(
                        ColumnDef::new(Subscriptions::Published)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Subscriptions::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Subscriptions::SelfHref).string().not_null())
                    .col(ColumnDef::new(Subscriptions::UpHref).string().not_null())
                    .col(ColumnDef::new(Subscriptions::HashedId).string())
                    .col(
                        ColumnDef::new(Subscriptions::LastUpdate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Subscriptions::AuthorizationId).uuid())
                    .col(ColumnDef::new(Subscriptions::RetailCustomerId).uuid())
                    .col(ColumnDef::new(Subscriptions::ApplicationInformationId).uuid())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscriptions_authorization")
                            .from(Subscriptions::Table, Subscriptions::AuthorizationId)
                            .to(Authorizations::Table, Authorizations::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscriptions_retail_customer")
                            .from(Subscriptions::Table, Subscriptions::RetailCustomerId)
                            .to(RetailCustomers::Table, RetailCustomers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscriptions_application_information")
                            .from(
                                Subscriptions::Table,
                                Subscriptions::ApplicationInformationId,
                            )
                            .to(ApplicationInformation::Table, ApplicationInformation::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subscriptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Authorizations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ApplicationInformation::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ApplicationInformation {
    Table,
    Id,
    Description,
    Published,
    Updated,
    SelfHref,
    UpHref,
    ClientId,
    ClientSecret,
    ClientName,
    ClientIdIssuedAt,
    ClientSecretExpiresAt,
    ThirdPartyApplicationDescription,
    ThirdPartyNotifyUri,
    RedirectUri,
    TokenEndpointAuthMethod,
    Scope,
    GrantTypes,
    TokenType,
    AuthorizationServerUri,
    AuthorizationServerAuthorizationEndpoint,
    AuthorizationServerTokenEndpoint,
    DataCustodianId,
    DataCustodianResourceEndpoint,
}

#[derive(Iden)]
pub enum Authorizations {
    Table,
    Id,
    Description,
    Published,
    Updated,
    SelfHref,
    UpHref,
    Status,
    AuthorizedPeriodStart,
    AuthorizedPeriodDuration,
    PublishedPeriodStart,
    PublishedPeriodDuration,
    ExpiresAt,
    Scope,
    AccessToken,
    RefreshToken,
    TokenType,
    GrantType,
    Error,
    ErrorDescription,
    ResourceUri,
    AuthorizationUri,
    ThirdParty,
    RetailCustomerId,
    ApplicationInformationId,
}

#[derive(Iden)]
pub enum Subscriptions {
    Table,
    Id,
    Description,
    Published,
    Updated,
    SelfHref,
    UpHref,
    HashedId,
    LastUpdate,
    AuthorizationId,
    RetailCustomerId,
    ApplicationInformationId,
}
