//! ReadingType repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::ReadingType;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReadingTypeRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ReadingType>>;
    async fn find_all(&self) -> DomainResult<Vec<ReadingType>>;
    async fn save(&self, reading_type: ReadingType) -> DomainResult<()>;
}
