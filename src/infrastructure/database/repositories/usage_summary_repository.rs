//! SeaORM implementation of UsageSummaryRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::codes::{Currency, EnrollmentStatus, QualityOfReading};
use crate::domain::usage_summary::{
    BillingChargeSource, LineItem, TariffRiderRef, UsageSummary, UsageSummaryRepository,
};
use crate::domain::values::DateTimeInterval;
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{line_item, tariff_rider_ref, usage_summary};

use super::{db_err, measurement_from_columns, measurement_to_columns, resource_from_columns};

pub struct SeaOrmUsageSummaryRepository {
    db: DatabaseConnection,
}

impl SeaOrmUsageSummaryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn line_item_to_domain(m: line_item::Model) -> DomainResult<LineItem> {
    Ok(LineItem {
        amount: m.amount,
        rounding: m.rounding,
        date_time: m.date_time,
        note: m.note,
        measurement: measurement_from_columns(
            m.measurement_multiplier,
            m.measurement_time_stamp,
            m.measurement_uom,
            m.measurement_value,
            m.measurement_ref,
        )?,
    })
}

fn rider_to_domain(m: tariff_rider_ref::Model) -> DomainResult<TariffRiderRef> {
    Ok(TariffRiderRef {
        rider_type: m.rider_type,
        enrollment_status: EnrollmentStatus::resolve(&m.enrollment_status)?,
        effective_date: m.effective_date,
    })
}

/// Load one summary together with its owned line items and tariff riders.
pub(super) async fn load<C: ConnectionTrait>(
    conn: &C,
    m: usage_summary::Model,
) -> DomainResult<UsageSummary> {
    let line_items = line_item::Entity::find()
        .filter(line_item::Column::UsageSummaryId.eq(m.id))
        .order_by_asc(line_item::Column::DateTime)
        .all(conn)
        .await
        .map_err(db_err)?
        .into_iter()
        .map(line_item_to_domain)
        .collect::<DomainResult<Vec<_>>>()?;

    let tariff_rider_refs = tariff_rider_ref::Entity::find()
        .filter(tariff_rider_ref::Column::UsageSummaryId.eq(m.id))
        .order_by_asc(tariff_rider_ref::Column::Id)
        .all(conn)
        .await
        .map_err(db_err)?
        .into_iter()
        .map(rider_to_domain)
        .collect::<DomainResult<Vec<_>>>()?;

    let billing_period = match (m.billing_period_start, m.billing_period_duration) {
        (Some(start), Some(duration)) => Some(DateTimeInterval::new(start, duration)),
        _ => None,
    };

    Ok(UsageSummary {
        resource: resource_from_columns(
            m.id,
            m.description,
            m.published,
            m.updated,
            m.self_href,
            m.up_href,
        ),
        usage_point_id: Some(m.usage_point_id),
        billing_period,
        bill_last_period: m.bill_last_period,
        bill_to_date: m.bill_to_date,
        cost_additional_last_period: m.cost_additional_last_period,
        currency: m.currency.map(Currency::resolve).transpose()?,
        overall_consumption_last_period: measurement_from_columns(
            m.overall_last_period_multiplier,
            m.overall_last_period_time_stamp,
            m.overall_last_period_uom,
            m.overall_last_period_value,
            m.overall_last_period_ref,
        )?,
        current_billing_period_overall_consumption: measurement_from_columns(
            m.current_period_multiplier,
            m.current_period_time_stamp,
            m.current_period_uom,
            m.current_period_value,
            m.current_period_ref,
        )?,
        current_day_net_consumption: measurement_from_columns(
            m.current_day_net_multiplier,
            m.current_day_net_time_stamp,
            m.current_day_net_uom,
            m.current_day_net_value,
            m.current_day_net_ref,
        )?,
        current_day_overall_consumption: measurement_from_columns(
            m.current_day_overall_multiplier,
            m.current_day_overall_time_stamp,
            m.current_day_overall_uom,
            m.current_day_overall_value,
            m.current_day_overall_ref,
        )?,
        peak_demand: measurement_from_columns(
            m.peak_demand_multiplier,
            m.peak_demand_time_stamp,
            m.peak_demand_uom,
            m.peak_demand_value,
            m.peak_demand_ref,
        )?,
        previous_day_net_consumption: measurement_from_columns(
            m.previous_day_net_multiplier,
            m.previous_day_net_time_stamp,
            m.previous_day_net_uom,
            m.previous_day_net_value,
            m.previous_day_net_ref,
        )?,
        quality_of_reading: m
            .quality_of_reading
            .map(QualityOfReading::resolve)
            .transpose()?,
        read_cycle: m.read_cycle,
        status_time_stamp: m.status_time_stamp,
        tariff_profile: m.tariff_profile,
        billing_charge_source: m
            .bcs_agency_name
            .map(|agency_name| BillingChargeSource {
                agency_name: Some(agency_name),
            }),
        line_items,
        tariff_rider_refs,
    })
}

/// Insert one summary with its owned rows.
pub(super) async fn insert<C: ConnectionTrait>(
    conn: &C,
    usage_point_id: Uuid,
    s: UsageSummary,
) -> DomainResult<()> {
    let (olp_mult, olp_ts, olp_uom, olp_value, olp_ref) =
        measurement_to_columns(s.overall_consumption_last_period.as_ref());
    let (cp_mult, cp_ts, cp_uom, cp_value, cp_ref) =
        measurement_to_columns(s.current_billing_period_overall_consumption.as_ref());
    let (cdn_mult, cdn_ts, cdn_uom, cdn_value, cdn_ref) =
        measurement_to_columns(s.current_day_net_consumption.as_ref());
    let (cdo_mult, cdo_ts, cdo_uom, cdo_value, cdo_ref) =
        measurement_to_columns(s.current_day_overall_consumption.as_ref());
    let (pd_mult, pd_ts, pd_uom, pd_value, pd_ref) =
        measurement_to_columns(s.peak_demand.as_ref());
    let (pdn_mult, pdn_ts, pdn_uom, pdn_value, pdn_ref) =
        measurement_to_columns(s.previous_day_net_consumption.as_ref());

    let model = usage_summary::ActiveModel {
        id: Set(s.resource.id),
        description: Set(s.resource.description),
        published: Set(s.resource.published),
        updated: Set(s.resource.updated),
        self_href: Set(s.resource.self_href),
        up_href: Set(s.resource.up_href),
        usage_point_id: Set(usage_point_id),
        billing_period_start: Set(s.billing_period.map(|p| p.start)),
        billing_period_duration: Set(s.billing_period.map(|p| p.duration)),
        bill_last_period: Set(s.bill_last_period),
        bill_to_date: Set(s.bill_to_date),
        cost_additional_last_period: Set(s.cost_additional_last_period),
        currency: Set(s.currency.map(|c| c.code())),
        overall_last_period_multiplier: Set(olp_mult),
        overall_last_period_time_stamp: Set(olp_ts),
        overall_last_period_uom: Set(olp_uom),
        overall_last_period_value: Set(olp_value),
        overall_last_period_ref: Set(olp_ref),
        current_period_multiplier: Set(cp_mult),
        current_period_time_stamp: Set(cp_ts),
        current_period_uom: Set(cp_uom),
        current_period_value: Set(cp_value),
        current_period_ref: Set(cp_ref),
        current_day_net_multiplier: Set(cdn_mult),
        current_day_net_time_stamp: Set(cdn_ts),
        current_day_net_uom: Set(cdn_uom),
        current_day_net_value: Set(cdn_value),
        current_day_net_ref: Set(cdn_ref),
        current_day_overall_multiplier: Set(cdo_mult),
        current_day_overall_time_stamp: Set(cdo_ts),
        current_day_overall_uom: Set(cdo_uom),
        current_day_overall_value: Set(cdo_value),
        current_day_overall_ref: Set(cdo_ref),
        peak_demand_multiplier: Set(pd_mult),
        peak_demand_time_stamp: Set(pd_ts),
        peak_demand_uom: Set(pd_uom),
        peak_demand_value: Set(pd_value),
        peak_demand_ref: Set(pd_ref),
        previous_day_net_multiplier: Set(pdn_mult),
        previous_day_net_time_stamp: Set(pdn_ts),
        previous_day_net_uom: Set(pdn_uom),
        previous_day_net_value: Set(pdn_value),
        previous_day_net_ref: Set(pdn_ref),
        quality_of_reading: Set(s.quality_of_reading.map(|q| q.code())),
        read_cycle: Set(s.read_cycle),
        status_time_stamp: Set(s.status_time_stamp),
        tariff_profile: Set(s.tariff_profile),
        bcs_agency_name: Set(s.billing_charge_source.and_then(|b| b.agency_name)),
    };
    let summary_id = s.resource.id;
    model.insert(conn).await.map_err(db_err)?;

    for item in s.line_items {
        let (mult, ts, uom, value, rt) = measurement_to_columns(item.measurement.as_ref());
        let row = line_item::ActiveModel {
            id: NotSet,
            usage_summary_id: Set(summary_id),
            amount: Set(item.amount),
            rounding: Set(item.rounding),
            date_time: Set(item.date_time),
            note: Set(item.note),
            measurement_multiplier: Set(mult),
            measurement_time_stamp: Set(ts),
            measurement_uom: Set(uom),
            measurement_value: Set(value),
            measurement_ref: Set(rt),
        };
        row.insert(conn).await.map_err(db_err)?;
    }

    for rider in s.tariff_rider_refs {
        let row = tariff_rider_ref::ActiveModel {
            id: NotSet,
            usage_summary_id: Set(summary_id),
            rider_type: Set(rider.rider_type),
            enrollment_status: Set(rider.enrollment_status.code().to_string()),
            effective_date: Set(rider.effective_date),
        };
        row.insert(conn).await.map_err(db_err)?;
    }

    Ok(())
}

#[async_trait]
impl UsageSummaryRepository for SeaOrmUsageSummaryRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<UsageSummary>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let model = usage_summary::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        let summary = match model {
            Some(m) => Some(load(&txn, m).await?),
            None => None,
        };
        txn.commit().await.map_err(db_err)?;
        Ok(summary)
    }

    async fn find_all(&self) -> DomainResult<Vec<UsageSummary>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let models = usage_summary::Entity::find()
            .order_by_asc(usage_summary::Column::SelfHref)
            .all(&txn)
            .await
            .map_err(db_err)?;
        let mut summaries = Vec::with_capacity(models.len());
        for m in models {
            summaries.push(load(&txn, m).await?);
        }
        txn.commit().await.map_err(db_err)?;
        Ok(summaries)
    }
}
