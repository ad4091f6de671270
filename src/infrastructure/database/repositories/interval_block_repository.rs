//! SeaORM implementation of IntervalBlockRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::codes::QualityOfReading;
use crate::domain::meter_reading::{IntervalBlock, IntervalBlockRepository, IntervalReading};
use crate::domain::values::DateTimeInterval;
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{interval_block, interval_reading};

use super::{db_err, resource_from_columns};

pub struct SeaOrmIntervalBlockRepository {
    db: DatabaseConnection,
}

impl SeaOrmIntervalBlockRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn reading_to_domain(m: interval_reading::Model) -> DomainResult<IntervalReading> {
    Ok(IntervalReading {
        time_period: DateTimeInterval::new(m.start, m.duration),
        value: m.value,
        cost: m.cost,
        consumption_tier: m.consumption_tier,
        tou: m.tou,
        cpp: m.cpp,
        quality: m.quality.map(QualityOfReading::resolve).transpose()?,
    })
}

/// Load one block with its leaf readings, ordered by interval start.
pub(super) async fn load<C: ConnectionTrait>(
    conn: &C,
    m: interval_block::Model,
) -> DomainResult<IntervalBlock> {
    let readings = interval_reading::Entity::find()
        .filter(interval_reading::Column::IntervalBlockId.eq(m.id))
        .order_by_asc(interval_reading::Column::Start)
        .all(conn)
        .await
        .map_err(db_err)?
        .into_iter()
        .map(reading_to_domain)
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(IntervalBlock {
        resource: resource_from_columns(
            m.id,
            m.description,
            m.published,
            m.updated,
            m.self_href,
            m.up_href,
        ),
        meter_reading_id: Some(m.meter_reading_id),
        readings,
    })
}

/// Insert one block with its leaf readings.
pub(super) async fn insert<C: ConnectionTrait>(
    conn: &C,
    meter_reading_id: Uuid,
    block: IntervalBlock,
) -> DomainResult<()> {
    let model = interval_block::ActiveModel {
        id: Set(block.resource.id),
        description: Set(block.resource.description),
        published: Set(block.resource.published),
        updated: Set(block.resource.updated),
        self_href: Set(block.resource.self_href),
        up_href: Set(block.resource.up_href),
        meter_reading_id: Set(meter_reading_id),
    };
    let block_id = block.resource.id;
    model.insert(conn).await.map_err(db_err)?;

    for r in block.readings {
        let row = interval_reading::ActiveModel {
            id: NotSet,
            interval_block_id: Set(block_id),
            start: Set(r.time_period.start),
            duration: Set(r.time_period.duration),
            value: Set(r.value),
            cost: Set(r.cost),
            consumption_tier: Set(r.consumption_tier),
            tou: Set(r.tou),
            cpp: Set(r.cpp),
            quality: Set(r.quality.map(|q| q.code())),
        };
        row.insert(conn).await.map_err(db_err)?;
    }

    Ok(())
}

#[async_trait]
impl IntervalBlockRepository for SeaOrmIntervalBlockRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<IntervalBlock>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let model = interval_block::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        let block = match model {
            Some(m) => Some(load(&txn, m).await?),
            None => None,
        };
        txn.commit().await.map_err(db_err)?;
        Ok(block)
    }

    async fn find_all(&self) -> DomainResult<Vec<IntervalBlock>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let models = interval_block::Entity::find()
            .order_by_asc(interval_block::Column::SelfHref)
            .all(&txn)
            .await
            .map_err(db_err)?;
        let mut blocks = Vec::with_capacity(models.len());
        for m in models {
            blocks.push(load(&txn, m).await?);
        }
        txn.commit().await.map_err(db_err)?;
        Ok(blocks)
    }
}
