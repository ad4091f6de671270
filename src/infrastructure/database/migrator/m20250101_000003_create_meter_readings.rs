//! Create meter_readings, reading_types, interval_blocks and
//! interval_readings tables

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
                    .table(MeterReadings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MeterReadings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MeterReadings::Description).string())
                    .col(
                        ColumnDef::new(MeterReadings::Published)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MeterReadings::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MeterReadings::SelfHref).string().not_null())
                    .col(ColumnDef::new(MeterReadings::UpHref).string().not_null())
                    .col(ColumnDef::new(MeterReadings::UsagePointId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meter_readings_usage_point")
                            .from(MeterReadings::Table, MeterReadings::UsagePointId)
                            .to(UsagePoints::Table, UsagePoints::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_meter_readings_usage_point")
                    .table(MeterReadings::Table)
                    .col(MeterReadings::UsagePointId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReadingTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReadingTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ReadingTypes::Description).string())
                    .col(
                        ColumnDef::new(ReadingTypes::Published)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReadingTypes::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ReadingTypes::SelfHref).string().not_null())
                    .col(ColumnDef::new(ReadingTypes::UpHref).string().not_null())
                    .col(ColumnDef::new(ReadingTypes::MeterReadingId).uuid())
                    .col(ColumnDef::new(ReadingTypes::AccumulationBehaviour).integer())
                    .col(ColumnDef::new(ReadingTypes::Commodity).integer())
                    .col(ColumnDef::new(ReadingTypes::ConsumptionTier).small_integer())
                    .col(ColumnDef::new(ReadingTypes::Currency).integer())
                    .col(ColumnDef::new(ReadingTypes::DataQualifier).integer())
                    .col(ColumnDef::new(ReadingTypes::DefaultQuality).integer())
                    .col(ColumnDef::new(ReadingTypes::FlowDirection).integer())
                    .col(ColumnDef::new(ReadingTypes::IntervalLength).big_integer())
                    .col(ColumnDef::new(ReadingTypes::Kind).integer())
                    .col(ColumnDef::new(ReadingTypes::Phase).integer())
                    .col(ColumnDef::new(ReadingTypes::PowerOfTenMultiplier).integer())
                    .col(ColumnDef::new(ReadingTypes::TimeAttribute).integer())
                    .col(ColumnDef::new(ReadingTypes::Uom).integer())
                    .col(ColumnDef::new(ReadingTypes::Cpp).small_integer())
                    .col(ColumnDef::new(ReadingTypes::Tou).small_integer())
                    .col(ColumnDef::new(ReadingTypes::ArgumentNumerator).big_integer())
                    .col(ColumnDef::new(ReadingTypes::ArgumentDenominator).big_integer())
                    .col(ColumnDef::new(ReadingTypes::InterharmonicNumerator).big_integer())
                    .col(ColumnDef::new(ReadingTypes::InterharmonicDenominator).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reading_types_meter_reading")
                            .from(ReadingTypes::Table, ReadingTypes::MeterReadingId)
                            .to(MeterReadings::Table, MeterReadings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IntervalBlocks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IntervalBlocks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IntervalBlocks::Description).string())
                    .col(
                        ColumnDef::new(IntervalBlocks::Published)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IntervalBlocks::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(IntervalBlocks::SelfHref).string().not_null())
                    .col(ColumnDef::new(IntervalBlocks::UpHref).string().not_null())
                    .col(
                        ColumnDef::new(IntervalBlocks::MeterReadingId)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interval_blocks_meter_reading")
                            .from(IntervalBlocks::Table, IntervalBlocks::MeterReadingId)
                            .to(MeterReadings::Table, MeterReadings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_interval_blocks_meter_reading")
                    .table(IntervalBlocks::Table)
                    .col(IntervalBlocks::MeterReadingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IntervalReadings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IntervalReadings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(IntervalReadings::IntervalBlockId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(IntervalReadings::Start).big_integer().not_null())
                    .col(
                        ColumnDef::new(IntervalReadings::Duration)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(IntervalReadings::Value).big_integer().not_null())
                    .col(ColumnDef::new(IntervalReadings::Cost).big_integer())
                    .col(ColumnDef::new(IntervalReadings::ConsumptionTier).small_integer())
                    .col(ColumnDef::new(IntervalReadings::Tou).small_integer())
                    .col(ColumnDef::new(IntervalReadings::Cpp).small_integer())
                    .col(ColumnDef::new(IntervalReadings::Quality).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interval_readings_interval_block")
                            .from(IntervalReadings::Table, IntervalReadings::IntervalBlockId)
                            .to(IntervalBlocks::Table, IntervalBlocks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_interval_readings_interval_block")
                    .table(IntervalReadings::Table)
                    .col(IntervalReadings::IntervalBlockId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IntervalReadings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IntervalBlocks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReadingTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MeterReadings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum MeterReadings {
    Table,
    Id,
    Description,
    Published,
    Updated,
    SelfHref,
    UpHref,
    UsagePointId,
}

#[derive(Iden)]
pub enum ReadingTypes {
    Table,
    Id,
    Description,
    Published,
    Updated,
    SelfHref,
    UpHref,
    MeterReadingId,
    AccumulationBehaviour,
    Commodity,
    ConsumptionTier,
    Currency,
    DataQualifier,
    DefaultQuality,
    FlowDirection,
    IntervalLength,
    Kind,
    Phase,
    PowerOfTenMultiplier,
    TimeAttribute,
    Uom,
    Cpp,
    Tou,
    ArgumentNumerator,
    ArgumentDenominator,
    InterharmonicNumerator,
    InterharmonicDenominator,
}

#[derive(Iden)]
pub enum IntervalBlocks {
    Table,
    Id,
    Description,
    Published,
    Updated,
    SelfHref,
    UpHref,
    MeterReadingId,
}

#[derive(Iden)]
pub enum IntervalReadings {
    Table,
    Id,
    IntervalBlockId,
    Start,
    Duration,
    Value,
    Cost,
    ConsumptionTier,
    Tou,
    Cpp,
    Quality,
}
