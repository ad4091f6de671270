//! Meter reading & interval block repository interfaces

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{IntervalBlock, MeterReading};
use crate::domain::DomainResult;

#[async_trait]
pub trait MeterReadingRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<MeterReading>>;
    async fn find_all(&self) -> DomainResult<Vec<MeterReading>>;
    async fn save(&self, meter_reading: MeterReading) -> DomainResult<()>;
}

#[async_trait]
pub trait IntervalBlockRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<IntervalBlock>>;
    async fn find_all(&self) -> DomainResult<Vec<IntervalBlock>>;
}
