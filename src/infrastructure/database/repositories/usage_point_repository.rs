//! SeaORM implementation of UsagePointRepository
//!
//! The usage point aggregate is the deepest one served: a read brings
//! back meter readings with their blocks and reading types, power quality
//! summaries and usage summaries, all inside a single transaction.

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::codes::{PhaseCode, ServiceKind, UsagePointConnectedKind};
use crate::domain::usage_point::{
    AggregateNodeRef, PnodeRef, ServiceDeliveryPoint, TimeConfiguration, UsagePoint,
    UsagePointRepository,
};
use crate::domain::values::{AcceptanceTest, LifecycleDates};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{
    aggregate_node_ref, meter_reading, pnode_ref, power_quality_summary, usage_point,
    usage_summary,
};

use super::{
    db_err, measurement_from_columns, measurement_to_columns, meter_reading_repository,
    power_quality_repository, resource_from_columns, usage_summary_repository,
};

pub struct SeaOrmUsagePointRepository {
    db: DatabaseConnection,
}

impl SeaOrmUsagePointRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn load<C: ConnectionTrait>(conn: &C, m: usage_point::Model) -> DomainResult<UsagePoint> {
    let id = m.id;

    let pnode_refs = pnode_ref::Entity::find()
        .filter(pnode_ref::Column::UsagePointId.eq(id))
        .order_by_asc(pnode_ref::Column::Id)
        .all(conn)
        .await
        .map_err(db_err)?
        .into_iter()
        .map(|r| PnodeRef {
            apnode_type: r.apnode_type,
            node_ref: r.node_ref,
            start_effective_date: r.start_effective_date,
            end_effective_date: r.end_effective_date,
        })
        .collect();

    let aggregate_node_refs = aggregate_node_ref::Entity::find()
        .filter(aggregate_node_ref::Column::UsagePointId.eq(id))
        .order_by_asc(aggregate_node_ref::Column::Id)
        .all(conn)
        .await
        .map_err(db_err)?
        .into_iter()
        .map(|r| AggregateNodeRef {
            anode_type: r.anode_type,
            node_ref: r.node_ref,
            start_effective_date: r.start_effective_date,
            end_effective_date: r.end_effective_date,
        })
        .collect();

    let reading_models = meter_reading::Entity::find()
        .filter(meter_reading::Column::UsagePointId.eq(id))
        .order_by_asc(meter_reading::Column::SelfHref)
        .all(conn)
        .await
        .map_err(db_err)?;
    let mut meter_readings = Vec::with_capacity(reading_models.len());
    for r in reading_models {
        meter_readings.push(meter_reading_repository::load(conn, r).await?);
    }

    let power_quality_summaries = power_quality_summary::Entity::find()
        .filter(power_quality_summary::Column::UsagePointId.eq(id))
        .order_by_asc(power_quality_summary::Column::SelfHref)
        .all(conn)
        .await
        .map_err(db_err)?
        .into_iter()
        .map(power_quality_repository::model_to_domain)
        .collect::<DomainResult<Vec<_>>>()?;

    let summary_models = usage_summary::Entity::find()
        .filter(usage_summary::Column::UsagePointId.eq(id))
        .order_by_asc(usage_summary::Column::SelfHref)
        .all(conn)
        .await
        .map_err(db_err)?;
    let mut usage_summaries = Vec::with_capacity(summary_models.len());
    for s in summary_models {
        usage_summaries.push(usage_summary_repository::load(conn, s).await?);
    }

    let service_delivery_point = if m.sdp_name.is_some()
        || m.sdp_tariff_profile.is_some()
        || m.sdp_customer_agreement.is_some()
    {
        Some(ServiceDeliveryPoint {
            name: m.sdp_name,
            tariff_profile: m.sdp_tariff_profile,
            customer_agreement: m.sdp_customer_agreement,
        })
    } else {
        None
    };

    // All four parts or nothing; a partial time configuration is useless.
    let local_time_parameters = match (
        m.ltp_dst_start_rule,
        m.ltp_dst_end_rule,
        m.ltp_dst_offset,
        m.ltp_tz_offset,
    ) {
        (Some(dst_start_rule), Some(dst_end_rule), Some(dst_offset), Some(tz_offset)) => {
            Some(TimeConfiguration {
                dst_end_rule,
                dst_offset,
                dst_start_rule,
                tz_offset,
            })
        }
        _ => None,
    };

    let acceptance_test = m.at_success.map(|success| AcceptanceTest {
        date_time: m.at_date_time,
        success,
        kind: m.at_kind,
    });

    let lifecycle = if m.lc_manufactured_date.is_some()
        || m.lc_purchase_date.is_some()
        || m.lc_received_date.is_some()
        || m.lc_installation_date.is_some()
        || m.lc_removal_date.is_some()
        || m.lc_retired_date.is_some()
    {
        Some(LifecycleDates {
            manufactured_date: m.lc_manufactured_date,
            purchase_date: m.lc_purchase_date,
            received_date: m.lc_received_date,
            installation_date: m.lc_installation_date,
            removal_date: m.lc_removal_date,
            retired_date: m.lc_retired_date,
        })
    } else {
        None
    };

    Ok(UsagePoint {
        resource: resource_from_columns(
            m.id,
            m.description,
            m.published,
            m.updated,
            m.self_href,
            m.up_href,
        ),
        role_flags: m.role_flags,
        service_category: ServiceKind::resolve(m.service_category)?,
        connection_state: m
            .connection_state
            .as_deref()
            .map(UsagePointConnectedKind::resolve)
            .transpose()?,
        phase_code: m.phase_code.map(PhaseCode::resolve).transpose()?,
        status: m.status,
        service_delivery_point,
        local_time_parameters,
        retail_customer_id: m.retail_customer_id,
        estimated_load: measurement_from_columns(
            m.estimated_load_multiplier,
            m.estimated_load_time_stamp,
            m.estimated_load_uom,
            m.estimated_load_value,
            m.estimated_load_ref,
        )?,
        nominal_service_voltage: measurement_from_columns(
            m.nominal_voltage_multiplier,
            m.nominal_voltage_time_stamp,
            m.nominal_voltage_uom,
            m.nominal_voltage_value,
            m.nominal_voltage_ref,
        )?,
        rated_current: measurement_from_columns(
            m.rated_current_multiplier,
            m.rated_current_time_stamp,
            m.rated_current_uom,
            m.rated_current_value,
            m.rated_current_ref,
        )?,
        rated_power: measurement_from_columns(
            m.rated_power_multiplier,
            m.rated_power_time_stamp,
            m.rated_power_uom,
            m.rated_power_value,
            m.rated_power_ref,
        )?,
        acceptance_test,
        lifecycle,
        pnode_refs,
        aggregate_node_refs,
        meter_readings,
        power_quality_summaries,
        usage_summaries,
    })
}

async fn insert<C: ConnectionTrait>(conn: &C, up: UsagePoint) -> DomainResult<()> {
    let (el_mult, el_ts, el_uom, el_value, el_ref) =
        measurement_to_columns(up.estimated_load.as_ref());
    let (nv_mult, nv_ts, nv_uom, nv_value, nv_ref) =
        measurement_to_columns(up.nominal_service_voltage.as_ref());
    let (rc_mult, rc_ts, rc_uom, rc_value, rc_ref) =
        measurement_to_columns(up.rated_current.as_ref());
    let (rp_mult, rp_ts, rp_uom, rp_value, rp_ref) =
        measurement_to_columns(up.rated_power.as_ref());

    let sdp = up.service_delivery_point.unwrap_or_default();
    let ltp = up.local_time_parameters;
    let at = up.acceptance_test;
    let lc = up.lifecycle.unwrap_or_default();

    let model = usage_point::ActiveModel {
        id: Set(up.resource.id),
        description: Set(up.resource.description),
        published: Set(up.resource.published),
        updated: Set(up.resource.updated),
        self_href: Set(up.resource.self_href),
        up_href: Set(up.resource.up_href),
        role_flags: Set(up.role_flags),
        service_category: Set(up.service_category.code()),
        connection_state: Set(up.connection_state.map(|c| c.code().to_string())),
        phase_code: Set(up.phase_code.map(|c| c.code())),
        status: Set(up.status),
        sdp_name: Set(sdp.name),
        sdp_tariff_profile: Set(sdp.tariff_profile),
        sdp_customer_agreement: Set(sdp.customer_agreement),
        ltp_dst_start_rule: Set(ltp.as_ref().map(|t| t.dst_start_rule.clone())),
        ltp_dst_end_rule: Set(ltp.as_ref().map(|t| t.dst_end_rule.clone())),
        ltp_dst_offset: Set(ltp.as_ref().map(|t| t.dst_offset)),
        ltp_tz_offset: Set(ltp.as_ref().map(|t| t.tz_offset)),
        retail_customer_id: Set(up.retail_customer_id),
        estimated_load_multiplier: Set(el_mult),
        estimated_load_time_stamp: Set(el_ts),
        estimated_load_uom: Set(el_uom),
        estimated_load_value: Set(el_value),
        estimated_load_ref: Set(el_ref),
        nominal_voltage_multiplier: Set(nv_mult),
        nominal_voltage_time_stamp: Set(nv_ts),
        nominal_voltage_uom: Set(nv_uom),
        nominal_voltage_value: Set(nv_value),
        nominal_voltage_ref: Set(nv_ref),
        rated_current_multiplier: Set(rc_mult),
        rated_current_time_stamp: Set(rc_ts),
        rated_current_uom: Set(rc_uom),
        rated_current_value: Set(rc_value),
        rated_current_ref: Set(rc_ref),
        rated_power_multiplier: Set(rp_mult),
        rated_power_time_stamp: Set(rp_ts),
        rated_power_uom: Set(rp_uom),
        rated_power_value: Set(rp_value),
        rated_power_ref: Set(rp_ref),
        at_date_time: Set(at.as_ref().and_then(|a| a.date_time)),
        at_success: Set(at.as_ref().map(|a| a.success)),
        at_kind: Set(at.and_then(|a| a.kind)),
        lc_manufactured_date: Set(lc.manufactured_date),
        lc_purchase_date: Set(lc.purchase_date),
        lc_received_date: Set(lc.received_date),
        lc_installation_date: Set(lc.installation_date),
        lc_removal_date: Set(lc.removal_date),
        lc_retired_date: Set(lc.retired_date),
    };
    let usage_point_id = up.resource.id;
    model.insert(conn).await.map_err(db_err)?;

    for p in up.pnode_refs {
        let row = pnode_ref::ActiveModel {
            id: NotSet,
            usage_point_id: Set(usage_point_id),
            apnode_type: Set(p.apnode_type),
            node_ref: Set(p.node_ref),
            start_effective_date: Set(p.start_effective_date),
            end_effective_date: Set(p.end_effective_date),
        };
        row.insert(conn).await.map_err(db_err)?;
    }

    for a in up.aggregate_node_refs {
        let row = aggregate_node_ref::ActiveModel {
            id: NotSet,
            usage_point_id: Set(usage_point_id),
            anode_type: Set(a.anode_type),
            node_ref: Set(a.node_ref),
            start_effective_date: Set(a.start_effective_date),
            end_effective_date: Set(a.end_effective_date),
        };
        row.insert(conn).await.map_err(db_err)?;
    }

    for mr in up.meter_readings {
        meter_reading_repository::insert(conn, usage_point_id, mr).await?;
    }

    for s in up.power_quality_summaries {
        power_quality_repository::insert(conn, usage_point_id, s).await?;
    }

    for s in up.usage_summaries {
        usage_summary_repository::insert(conn, usage_point_id, s).await?;
    }

    Ok(())
}

#[async_trait]
impl UsagePointRepository for SeaOrmUsagePointRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<UsagePoint>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let model = usage_point::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        let usage_point = match model {
            Some(m) => Some(load(&txn, m).await?),
            None => None,
        };
        txn.commit().await.map_err(db_err)?;
        Ok(usage_point)
    }

    async fn find_all(&self) -> DomainResult<Vec<UsagePoint>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let models = usage_point::Entity::find()
            .order_by_asc(usage_point::Column::SelfHref)
            .all(&txn)
            .await
            .map_err(db_err)?;
        let mut points = Vec::with_capacity(models.len());
        for m in models {
            points.push(load(&txn, m).await?);
        }
        txn.commit().await.map_err(db_err)?;
        Ok(points)
    }

    async fn save(&self, usage_point: UsagePoint) -> DomainResult<()> {
        debug!("Saving usage point: {}", usage_point.resource.id);
        let txn = self.db.begin().await.map_err(db_err)?;
        insert(&txn, usage_point).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(())
    }
}
