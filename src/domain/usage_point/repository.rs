//! UsagePoint repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::UsagePoint;
use crate::domain::DomainResult;

/// Reads return the full owned subgraph (meter readings with their blocks
/// and reading types, power quality summaries, usage summaries with line
/// items) observed in one transactional snapshot.
#[async_trait]
pub trait UsagePointRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<UsagePoint>>;
    async fn find_all(&self) -> DomainResult<Vec<UsagePoint>>;
    async fn save(&self, usage_point: UsagePoint) -> DomainResult<()>;
}
