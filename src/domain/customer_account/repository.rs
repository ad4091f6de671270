//! CustomerAccount repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::CustomerAccount;
use crate::domain::DomainResult;

#[async_trait]
pub trait CustomerAccountRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<CustomerAccount>>;
    async fn find_all(&self) -> DomainResult<Vec<CustomerAccount>>;
    async fn save(&self, account: CustomerAccount) -> DomainResult<()>;
}
