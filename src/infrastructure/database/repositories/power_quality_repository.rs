//! SeaORM implementation of ElectricPowerQualitySummaryRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::domain::power_quality::{
    ElectricPowerQualitySummary, ElectricPowerQualitySummaryRepository,
};
use crate::domain::values::{DateTimeInterval, PerCent};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::power_quality_summary;

use super::{db_err, resource_from_columns};

pub struct SeaOrmPowerQualityRepository {
    db: DatabaseConnection,
}

impl SeaOrmPowerQualityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(super) fn model_to_domain(
    m: power_quality_summary::Model,
) -> DomainResult<ElectricPowerQualitySummary> {
    Ok(ElectricPowerQualitySummary {
        resource: resource_from_columns(
            m.id,
            m.description,
            m.published,
            m.updated,
            m.self_href,
            m.up_href,
        ),
        usage_point_id: Some(m.usage_point_id),
        flicker_plt: m.flicker_plt,
        flicker_pst: m.flicker_pst,
        harmonic_voltage: m.harmonic_voltage,
        long_interruptions: m.long_interruptions,
        mains_voltage: m.mains_voltage,
        measurement_protocol: m.measurement_protocol,
        power_frequency: m.power_frequency,
        rapid_voltage_changes: m.rapid_voltage_changes,
        short_interruptions: m.short_interruptions,
        summary_interval: DateTimeInterval::new(m.summary_start, m.summary_duration),
        supply_voltage_dips: m.supply_voltage_dips,
        supply_voltage_imbalance: m
            .supply_voltage_imbalance
            .map(PerCent::new)
            .transpose()?,
        supply_voltage_variations: m.supply_voltage_variations,
        temp_overvoltages: m.temp_overvoltages,
    })
}

pub(super) async fn insert<C: ConnectionTrait>(
    conn: &C,
    usage_point_id: Uuid,
    s: ElectricPowerQualitySummary,
) -> DomainResult<()> {
    let model = power_quality_summary::ActiveModel {
        id: Set(s.resource.id),
        description: Set(s.resource.description),
        published: Set(s.resource.published),
        updated: Set(s.resource.updated),
        self_href: Set(s.resource.self_href),
        up_href: Set(s.resource.up_href),
        usage_point_id: Set(usage_point_id),
        flicker_plt: Set(s.flicker_plt),
        flicker_pst: Set(s.flicker_pst),
        harmonic_voltage: Set(s.harmonic_voltage),
        long_interruptions: Set(s.long_interruptions),
        mains_voltage: Set(s.mains_voltage),
        measurement_protocol: Set(s.measurement_protocol),
        power_frequency: Set(s.power_frequency),
        rapid_voltage_changes: Set(s.rapid_voltage_changes),
        short_interruptions: Set(s.short_interruptions),
        summary_start: Set(s.summary_interval.start),
        summary_duration: Set(s.summary_interval.duration),
        supply_voltage_dips: Set(s.supply_voltage_dips),
        supply_voltage_imbalance: Set(s.supply_voltage_imbalance.map(PerCent::get)),
        supply_voltage_variations: Set(s.supply_voltage_variations),
        temp_overvoltages: Set(s.temp_overvoltages),
    };
    model.insert(conn).await.map_err(db_err)?;
    Ok(())
}

#[async_trait]
impl ElectricPowerQualitySummaryRepository for SeaOrmPowerQualityRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ElectricPowerQualitySummary>> {
        let model = power_quality_summary::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<ElectricPowerQualitySummary>> {
        let models = power_quality_summary::Entity::find()
            .order_by_asc(power_quality_summary::Column::SelfHref)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }
}
