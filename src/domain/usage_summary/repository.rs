//! UsageSummary repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::UsageSummary;
use crate::domain::DomainResult;

#[async_trait]
pub trait UsageSummaryRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<UsageSummary>>;
    async fn find_all(&self) -> DomainResult<Vec<UsageSummary>>;
}
