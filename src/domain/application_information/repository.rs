//! ApplicationInformation repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::ApplicationInformation;
use crate::domain::DomainResult;

#[async_trait]
pub trait ApplicationInformationRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ApplicationInformation>>;
    async fn find_all(&self) -> DomainResult<Vec<ApplicationInformation>>;
    async fn save(&self, info: ApplicationInformation) -> DomainResult<()>;
}
