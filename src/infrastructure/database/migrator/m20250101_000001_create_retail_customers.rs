//! Create retail_customers table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RetailCustomers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RetailCustomers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RetailCustomers::Description).string())
                    .col(
                        ColumnDef::new(RetailCustomers::Published)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RetailCustomers::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RetailCustomers::SelfHref).string().not_null())
                    .col(ColumnDef::new(RetailCustomers::UpHref).string().not_null())
                    .col(
                        ColumnDef::new(RetailCustomers::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(RetailCustomers::FirstName).string())
                    .col(ColumnDef::new(RetailCustomers::LastName).string())
                    .col(ColumnDef::new(RetailCustomers::Enabled).boolean().not_null())
                    .col(ColumnDef::new(RetailCustomers::Role).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_retail_customers_username")
                    .table(RetailCustomers::Table)
                    .col(RetailCustomers::Username)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RetailCustomers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RetailCustomers {
    Table,
    Id,
    Description,
    Published,
    Updated,
    SelfHref,
    UpHref,
    Username,
    FirstName,
    LastName,
    Enabled,
    Role,
}
