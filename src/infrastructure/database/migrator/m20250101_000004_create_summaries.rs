//! Create power_quality_summaries, usage_summaries, line_items and
//! tariff_rider_refs tables

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_usage_points::UsagePoints;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PowerQualitySummaries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PowerQualitySummaries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PowerQualitySummaries::Description).string())
                    .col(
                        ColumnDef::new(PowerQualitySummaries::Published)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PowerQualitySummaries::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PowerQualitySummaries::SelfHref)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PowerQualitySummaries::UpHref).string().not_null())
                    .col(
                        ColumnDef::new(PowerQualitySummaries::UsagePointId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PowerQualitySummaries::FlickerPlt).big_integer())
                    .col(ColumnDef::new(PowerQualitySummaries::FlickerPst).big_integer())
                    .col(ColumnDef::new(PowerQualitySummaries::HarmonicVoltage).big_integer())
                    .col(ColumnDef::new(PowerQualitySummaries::LongInterruptions).big_integer())
                    .col(ColumnDef::new(PowerQualitySummaries::MainsVoltage).big_integer())
                    .col(
                        ColumnDef::new(PowerQualitySummaries::MeasurementProtocol)
                            .small_integer(),
                    )
                    .col(ColumnDef::new(PowerQualitySummaries::PowerFrequency).big_integer())
                    .col(
                        ColumnDef::new(PowerQualitySummaries::RapidVoltageChanges)
                            .big_integer(),
                    )
                    .col(
                        ColumnDef::new(PowerQualitySummaries::ShortInterruptions)
                            .big_integer(),
                    )
                    .col(
                        ColumnDef::new(PowerQualitySummaries::SummaryStart)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PowerQualitySummaries::SummaryDuration)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PowerQualitySummaries::SupplyVoltageDips).big_integer())
                    .col(
                        ColumnDef::new(PowerQualitySummaries::SupplyVoltageImbalance)
                            .small_integer(),
                    )
                    .col(
                        ColumnDef::new(PowerQualitySummaries::SupplyVoltageVariations)
                            .big_integer(),
                    )
                    .col(ColumnDef::new(PowerQualitySummaries::TempOvervoltages).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_power_quality_summaries_usage_point")
                            .from(
                                PowerQualitySummaries::Table,
                                PowerQualitySummaries::UsagePointId,
                            )
                            .to(UsagePoints::Table, UsagePoints::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UsageSummaries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UsageSummaries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UsageSummaries::Description).string())
                    .col(
                        ColumnDef::new(UsageSummaries::Published)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UsageSummaries::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UsageSummaries::SelfHref).string().not_null())
                    .col(ColumnDef::new(UsageSummaries::UpHref).string().not_null())
                    .col(ColumnDef::new(UsageSummaries::UsagePointId).uuid().not_null())
                    .col(ColumnDef::new(UsageSummaries::BillingPeriodStart).big_integer())
                    .col(ColumnDef::new(UsageSummaries::BillingPeriodDuration).big_integer())
                    .col(ColumnDef::new(UsageSummaries::BillLastPeriod).big_integer())
                    .col(ColumnDef::new(UsageSummaries::BillToDate).big_integer())
                    .col(
                        ColumnDef::new(UsageSummaries::CostAdditionalLastPeriod)
                            .big_integer(),
                    )
                    .col(ColumnDef::new(UsageSummaries::Currency).integer())
                    .col(ColumnDef::new(UsageSummaries::OverallLastPeriodMultiplier).integer())
                    .col(
                        ColumnDef::new(UsageSummaries::OverallLastPeriodTimeStamp)
                            .big_integer(),
                    )
                    .col(ColumnDef::new(UsageSummaries::OverallLastPeriodUom).integer())
                    .col(ColumnDef::new(UsageSummaries::OverallLastPeriodValue).big_integer())
                    .col(ColumnDef::new(UsageSummaries::OverallLastPeriodRef).string())
                    .col(ColumnDef::new(UsageSummaries::CurrentPeriodMultiplier).integer())
                    .col(ColumnDef::new(UsageSummaries::CurrentPeriodTimeStamp).big_integer())
                    .col(ColumnDef::new(UsageSummaries::CurrentPeriodUom).integer())
                    .col(ColumnDef::new(UsageSummaries::CurrentPeriodValue).big_integer())
                    .col(ColumnDef::new(UsageSummaries::CurrentPeriodRef).string())
                    .col(ColumnDef::new(UsageSummaries::CurrentDayNetMultiplier).integer())
                    .col(ColumnDef::new(UsageSummaries::CurrentDayNetTimeStamp).big_integer())
                    .col(ColumnDef::new(UsageSummaries::CurrentDayNetUom).integer())
                    .col(ColumnDef::new(UsageSummaries::CurrentDayNetValue).big_integer())
                    .col(ColumnDef::new(UsageSummaries::CurrentDayNetRef).string())
                    .col(ColumnDef::new(UsageSummaries::CurrentDayOverallMultiplier).integer())
                    .col(
                        ColumnDef::new(UsageSummaries::CurrentDayOverallTimeStamp)
                            .big_integer(),
                    )
                    .col(ColumnDef::new(UsageSummaries::CurrentDayOverallUom).integer())
                    .col(ColumnDef::new(UsageSummaries::CurrentDayOverallValue).big_integer())
                    .col(ColumnDef::new(UsageSummaries::CurrentDayOverallRef).string())
                    .col(ColumnDef::new(UsageSummaries::PeakDemandMultiplier).integer())
                    .col(ColumnDef::new(UsageSummaries::PeakDemandTimeStamp).big_integer())
                    .col(ColumnDef::new(UsageSummaries::PeakDemandUom).integer())
                    .col(ColumnDef::new(UsageSummaries::PeakDemandValue).big_integer())
                    .col(ColumnDef::new(UsageSummaries::PeakDemandRef).string())
                    .col(ColumnDef::new(UsageSummaries::PreviousDayNetMultiplier).integer())
                    .col(ColumnDef::new(UsageSummaries::PreviousDayNetTimeStamp).big_integer())
                    .col(ColumnDef::new(UsageSummaries::PreviousDayNetUom).integer())
                    .col(ColumnDef::new(UsageSummaries::PreviousDayNetValue).big_integer())
                    .col(ColumnDef::new(UsageSummaries::PreviousDayNetRef).string())
                    .col(ColumnDef::new(UsageSummaries::QualityOfReading).integer())
                    .col(ColumnDef::new(UsageSummaries::ReadCycle).string())
                    .col(
                        ColumnDef::new(UsageSummaries::StatusTimeStamp)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UsageSummaries::TariffProfile).string())
                    .col(ColumnDef::new(UsageSummaries::BcsAgencyName).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usage_summaries_usage_point")
                            .from(UsageSummaries::Table, UsageSummaries::UsagePointId)
                            .to(UsagePoints::Table, UsagePoints::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LineItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LineItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LineItems::UsageSummaryId).uuid().not_null())
                    .col(ColumnDef::new(LineItems::Amount).big_integer().not_null())
                    .col(ColumnDef::new(LineItems::Rounding).big_integer())
                    .col(ColumnDef::new(LineItems::DateTime).big_integer().not_null())
                    .col(ColumnDef::new(LineItems::Note).string().not_null())
                    .col(ColumnDef::new(LineItems::MeasurementMultiplier).integer())
                    .col(ColumnDef::new(LineItems::MeasurementTimeStamp).big_integer())
                    .col(ColumnDef::new(LineItems::MeasurementUom).integer())
                    .col(ColumnDef::new(LineItems::MeasurementValue).big_integer())
                    .col(ColumnDef::new(LineItems::MeasurementRef).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_line_items_usage_summary")
                            .from(LineItems::Table, LineItems::UsageSummaryId)
                            .to(UsageSummaries::Table, UsageSummaries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TariffRiderRefs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TariffRiderRefs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TariffRiderRefs::UsageSummaryId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TariffRiderRefs::RiderType).string().not_null())
                    .col(
                        ColumnDef::new(TariffRiderRefs::EnrollmentStatus)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TariffRiderRefs::EffectiveDate)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tariff_rider_refs_usage_summary")
                            .from(TariffRiderRefs::Table, TariffRiderRefs::UsageSummaryId)
                            .to(UsageSummaries::Table, UsageSummaries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TariffRiderRefs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LineItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UsageSummaries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PowerQualitySummaries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PowerQualitySummaries {
    Table,
    Id,
    Description,
    Published,
    Updated,
    SelfHref,
    UpHref,
    UsagePointId,
    FlickerPlt,
    FlickerPst,
    HarmonicVoltage,
    LongInterruptions,
    MainsVoltage,
    MeasurementProtocol,
    PowerFrequency,
    RapidVoltageChanges,
    ShortInterruptions,
    SummaryStart,
    SummaryDuration,
    SupplyVoltageDips,
    SupplyVoltageImbalance,
    SupplyVoltageVariations,
    TempOvervoltages,
}

#[derive(Iden)]
pub enum UsageSummaries {
    Table,
    Id,
    Description,
    Published,
    Updated,
    SelfHref,
    UpHref,
    UsagePointId,
    BillingPeriodStart,
    BillingPeriodDuration,
    BillLastPeriod,
    BillToDate,
    CostAdditionalLastPeriod,
    Currency,
    OverallLastPeriodMultiplier,
    OverallLastPeriodTimeStamp,
    OverallLastPeriodUom,
    OverallLastPeriodValue,
    OverallLastPeriodRef,
    CurrentPeriodMultiplier,
    CurrentPeriodTimeStamp,
    CurrentPeriodUom,
    CurrentPeriodValue,
    CurrentPeriodRef,
    CurrentDayNetMultiplier,
    CurrentDayNetTimeStamp,
    CurrentDayNetUom,
    CurrentDayNetValue,
    CurrentDayNetRef,
    CurrentDayOverallMultiplier,
    CurrentDayOverallTimeStamp,
    CurrentDayOverallUom,
    CurrentDayOverallValue,
    CurrentDayOverallRef,
    PeakDemandMultiplier,
    PeakDemandTimeStamp,
    PeakDemandUom,
    PeakDemandValue,
    PeakDemandRef,
    PreviousDayNetMultiplier,
    PreviousDayNetTimeStamp,
    PreviousDayNetUom,
    PreviousDayNetValue,
    PreviousDayNetRef,
    QualityOfReading,
    ReadCycle,
    StatusTimeStamp,
    TariffProfile,
    BcsAgencyName,
}

#[derive(Iden)]
pub enum LineItems {
    Table,
    Id,
    UsageSummaryId,
    Amount,
    Rounding,
    DateTime,
    Note,
    MeasurementMultiplier,
    MeasurementTimeStamp,
    MeasurementUom,
    MeasurementValue,
    MeasurementRef,
}

#[derive(Iden)]
pub enum TariffRiderRefs {
    Table,
    Id,
    UsageSummaryId,
    RiderType,
    EnrollmentStatus,
    EffectiveDate,
}
