//! RetailCustomer repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::RetailCustomer;
use crate::domain::DomainResult;

#[async_trait]
pub trait RetailCustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<RetailCustomer>>;
    async fn find_all(&self) -> DomainResult<Vec<RetailCustomer>>;
    async fn save(&self, customer: RetailCustomer) -> DomainResult<()>;
}
