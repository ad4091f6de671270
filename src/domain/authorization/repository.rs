//! Authorization repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Authorization;
use crate::domain::DomainResult;

#[async_trait]
pub trait AuthorizationRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Authorization>>;
    async fn find_all(&self) -> DomainResult<Vec<Authorization>>;
    async fn save(&self, authorization: Authorization) -> DomainResult<()>;
}
