//! Create usage_points, pnode_refs and aggregate_node_refs tables

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
                    .table(UsagePoints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UsagePoints::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UsagePoints::Description).string())
                    .col(
                        ColumnDef::new(UsagePoints::Published)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UsagePoints::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UsagePoints::SelfHref).string().not_null())
                    .col(ColumnDef::new(UsagePoints::UpHref).string().not_null())
                    .col(ColumnDef::new(UsagePoints::RoleFlags).binary())
                    .col(
                        ColumnDef::new(UsagePoints::ServiceCategory)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UsagePoints::ConnectionState).string())
                    .col(ColumnDef::new(UsagePoints::PhaseCode).integer())
                    .col(ColumnDef::new(UsagePoints::Status).small_integer())
                    .col(ColumnDef::new(UsagePoints::SdpName).string())
                    .col(ColumnDef::new(UsagePoints::SdpTariffProfile).string())
                    .col(ColumnDef::new(UsagePoints::SdpCustomerAgreement).string())
                    .col(ColumnDef::new(UsagePoints::LtpDstStartRule).binary())
                    .col(ColumnDef::new(UsagePoints::LtpDstEndRule).binary())
                    .col(ColumnDef::new(UsagePoints::LtpDstOffset).big_integer())
                    .col(ColumnDef::new(UsagePoints::LtpTzOffset).big_integer())
                    .col(ColumnDef::new(UsagePoints::RetailCustomerId).uuid())
                    .col(ColumnDef::new(UsagePoints::EstimatedLoadMultiplier).integer())
                    .col(ColumnDef::new(UsagePoints::EstimatedLoadTimeStamp).big_integer())
                    .col(ColumnDef::new(UsagePoints::EstimatedLoadUom).integer())
                    .col(ColumnDef::new(UsagePoints::EstimatedLoadValue).big_integer())
                    .col(ColumnDef::new(UsagePoints::EstimatedLoadRef).string())
                    .col(ColumnDef::new(UsagePoints::NominalVoltageMultiplier).integer())
                    .col(ColumnDef::new(UsagePoints::NominalVoltageTimeStamp).big_integer())
                    .col(ColumnDef::new(UsagePoints::NominalVoltageUom).integer())
                    .col(ColumnDef::new(UsagePoints::NominalVoltageValue).big_integer())
                    .col(ColumnDef::new(UsagePoints::NominalVoltageRef).string())
                    .col(ColumnDef::new(UsagePoints::RatedCurrentMultiplier).integer())
                    .col(ColumnDef::new(UsagePoints::RatedCurrentTimeStamp).big_integer())
                    .col(ColumnDef::new(UsagePoints::RatedCurrentUom).integer())
                    .col(ColumnDef::new(UsagePoints::RatedCurrentValue).big_integer())
                    .col(ColumnDef::new(UsagePoints::RatedCurrentRef).string())
                    .col(ColumnDef::new(UsagePoints::RatedPowerMultiplier).integer())
                    .col(ColumnDef::new(UsagePoints::RatedPowerTimeStamp).big_integer())
                    .col(ColumnDef::new(UsagePoints::RatedPowerUom).integer())
                    .col(ColumnDef::new(UsagePoints::RatedPowerValue).big_integer())
                    .col(ColumnDef::new(UsagePoints::RatedPowerRef).string())
                    .col(ColumnDef::new(UsagePoints::AtDateTime).big_integer())
                    .col(ColumnDef::new(UsagePoints::AtSuccess).boolean())
                    .col(ColumnDef::new(UsagePoints::AtKind).string())
                    .col(ColumnDef::new(UsagePoints::LcManufacturedDate).big_integer())
                    .col(ColumnDef::new(UsagePoints::LcPurchaseDate).big_integer())
                    .col(ColumnDef::new(UsagePoints::LcReceivedDate).big_integer())
                    .col(ColumnDef::new(UsagePoints::LcInstallationDate).big_integer())
                    .col(ColumnDef::new(UsagePoints::LcRemovalDate).big_integer())
                    .col(ColumnDef::new(UsagePoints::LcRetiredDate).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usage_points_retail_customer")
                            .from(UsagePoints::Table, UsagePoints::RetailCustomerId)
                            .to(RetailCustomers::Table, RetailCustomers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_usage_points_retail_customer")
                    .table(UsagePoints::Table)
                    .col(UsagePoints::RetailCustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PnodeRefs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PnodeRefs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PnodeRefs::UsagePointId).uuid().not_null())
                    .col(ColumnDef::new(PnodeRefs::ApnodeType).string())
                    .col(ColumnDef::new(PnodeRefs::NodeRef).string().not_null())
                    .col(ColumnDef::new(PnodeRefs::StartEffectiveDate).big_integer())
                    .col(ColumnDef::new(PnodeRefs::EndEffectiveDate).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pnode_refs_usage_point")
                            .from(PnodeRefs::Table, PnodeRefs::UsagePointId)
                            .to(UsagePoints::Table, UsagePoints::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AggregateNodeRefs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AggregateNodeRefs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AggregateNodeRefs::UsagePointId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AggregateNodeRefs::AnodeType).string())
                    .col(ColumnDef::new(AggregateNodeRefs::NodeRef).string().not_null())
                    .col(ColumnDef::new(AggregateNodeRefs::StartEffectiveDate).big_integer())
                    .col(ColumnDef::new(AggregateNodeRefs::EndEffectiveDate).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aggregate_node_refs_usage_point")
                            .from(AggregateNodeRefs::Table, AggregateNodeRefs::UsagePointId)
                            .to(UsagePoints::Table, UsagePoints::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AggregateNodeRefs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PnodeRefs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UsagePoints::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum UsagePoints {
    Table,
    Id,
    Description,
    Published,
    Updated,
    SelfHref,
    UpHref,
    RoleFlags,
    ServiceCategory,
    ConnectionState,
    PhaseCode,
    Status,
    SdpName,
    SdpTariffProfile,
    SdpCustomerAgreement,
    LtpDstStartRule,
    LtpDstEndRule,
    LtpDstOffset,
    LtpTzOffset,
    RetailCustomerId,
    EstimatedLoadMultiplier,
    EstimatedLoadTimeStamp,
    EstimatedLoadUom,
    EstimatedLoadValue,
    EstimatedLoadRef,
    NominalVoltageMultiplier,
    NominalVoltageTimeStamp,
    NominalVoltageUom,
    NominalVoltageValue,
    NominalVoltageRef,
    RatedCurrentMultiplier,
    RatedCurrentTimeStamp,
    RatedCurrentUom,
    RatedCurrentValue,
    RatedCurrentRef,
    RatedPowerMultiplier,
    RatedPowerTimeStamp,
    RatedPowerUom,
    RatedPowerValue,
    RatedPowerRef,
    AtDateTime,
    AtSuccess,
    AtKind,
    LcManufacturedDate,
    LcPurchaseDate,
    LcReceivedDate,
    LcInstallationDate,
    LcRemovalDate,
    LcRetiredDate,
}

#[derive(Iden)]
pub enum PnodeRefs {
    Table,
    Id,
    UsagePointId,
    ApnodeType,
    NodeRef,
    StartEffectiveDate,
    EndEffectiveDate,
}

#[derive(Iden)]
pub enum AggregateNodeRefs {
    Table,
    Id,
    UsagePointId,
    AnodeType,
    NodeRef,
    StartEffectiveDate,
    EndEffectiveDate,
}
