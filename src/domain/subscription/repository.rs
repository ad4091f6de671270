//! Subscription repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Subscription;
use crate::domain::DomainResult;

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Subscription>>;
    async fn find_all(&self) -> DomainResult<Vec<Subscription>>;
    async fn save(&self, subscription: Subscription) -> DomainResult<()>;
}
