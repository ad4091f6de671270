//! SeaORM implementation of MeterReadingRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::meter_reading::{MeterReading, MeterReadingRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{interval_block, meter_reading, reading_type};

use super::{db_err, interval_block_repository, reading_type_repository, resource_from_columns};

pub struct SeaOrmMeterReadingRepository {
    db: DatabaseConnection,
}

impl SeaOrmMeterReadingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Load one meter reading with its reading type and interval blocks.
pub(super) async fn load<C: ConnectionTrait>(
    conn: &C,
    m: meter_reading::Model,
) -> DomainResult<MeterReading> {
    let reading_type = reading_type::Entity::find()
        .filter(reading_type::Column::MeterReadingId.eq(m.id))
        .one(conn)
        .await
        .map_err(db_err)?
        .map(reading_type_repository::model_to_domain)
        .transpose()?;

    let block_models = interval_block::Entity::find()
        .filter(interval_block::Column::MeterReadingId.eq(m.id))
        .order_by_asc(interval_block::Column::SelfHref)
        .all(conn)
        .await
        .map_err(db_err)?;
    let mut interval_blocks = Vec::with_capacity(block_models.len());
    for b in block_models {
        interval_blocks.push(interval_block_repository::load(conn, b).await?);
    }

    Ok(MeterReading {
        resource: resource_from_columns(
            m.id,
            m.description,
            m.published,
            m.updated,
            m.self_href,
            m.up_href,
        ),
        usage_point_id: Some(m.usage_point_id),
        reading_type,
        interval_blocks,
    })
}

/// Insert one meter reading with its owned reading type and blocks.
pub(super) async fn insert<C: ConnectionTrait>(
    conn: &C,
    usage_point_id: Uuid,
    mr: MeterReading,
) -> DomainResult<()> {
    let model = meter_reading::ActiveModel {
        id: Set(mr.resource.id),
        description: Set(mr.resource.description),
        published: Set(mr.resource.published),
        updated: Set(mr.resource.updated),
        self_href: Set(mr.resource.self_href),
        up_href: Set(mr.resource.up_href),
        usage_point_id: Set(usage_point_id),
    };
    let meter_reading_id = mr.resource.id;
    model.insert(conn).await.map_err(db_err)?;

    if let Some(mut rt) = mr.reading_type {
        rt.meter_reading_id = Some(meter_reading_id);
        reading_type_repository::insert(conn, rt).await?;
    }

    for block in mr.interval_blocks {
        interval_block_repository::insert(conn, meter_reading_id, block).await?;
    }

    Ok(())
}

#[async_trait]
impl MeterReadingRepository for SeaOrmMeterReadingRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<MeterReading>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let model = meter_reading::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        let meter_reading = match model {
            Some(m) => Some(load(&txn, m).await?),
            None => None,
        };
        txn.commit().await.map_err(db_err)?;
        Ok(meter_reading)
    }

    async fn find_all(&self) -> DomainResult<Vec<MeterReading>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let models = meter_reading::Entity::find()
            .order_by_asc(meter_reading::Column::SelfHref)
            .all(&txn)
            .await
            .map_err(db_err)?;
        let mut readings = Vec::with_capacity(models.len());
        for m in models {
            readings.push(load(&txn, m).await?);
        }
        txn.commit().await.map_err(db_err)?;
        Ok(readings)
    }

    async fn save(&self, meter_reading: MeterReading) -> DomainResult<()> {
        debug!("Saving meter reading: {}", meter_reading.resource.id);
        let usage_point_id = meter_reading
            .usage_point_id
            .ok_or_else(|| crate::domain::DomainError::InvalidValue(
                "meter reading has no owning usage point".to_string(),
            ))?;
        let txn = self.db.begin().await.map_err(db_err)?;
        insert(&txn, usage_point_id, meter_reading).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(())
    }
}
