//! ElectricPowerQualitySummary repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::ElectricPowerQualitySummary;
use crate::domain::DomainResult;

#[async_trait]
pub trait ElectricPowerQualitySummaryRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ElectricPowerQualitySummary>>;
    async fn find_all(&self) -> DomainResult<Vec<ElectricPowerQualitySummary>>;
}
