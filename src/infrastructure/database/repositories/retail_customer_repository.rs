//! SeaORM implementation of RetailCustomerRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::domain::retail_customer::{RetailCustomer, RetailCustomerRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::retail_customer;

use super::{db_err, resource_from_columns};

pub struct SeaOrmRetailCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmRetailCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: retail_customer::Model) -> RetailCustomer {
    RetailCustomer {
        resource: resource_from_columns(
            m.id,
            m.description,
            m.published,
            m.updated,
            m.self_href,
            m.up_href,
        ),
        username: m.username,
        first_name: m.first_name,
        last_name: m.last_name,
        enabled: m.enabled,
        role: m.role,
    }
}

#[async_trait]
impl RetailCustomerRepository for SeaOrmRetailCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<RetailCustomer>> {
        let model = retail_customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<RetailCustomer>> {
        let models = retail_customer::Entity::find()
            .order_by_asc(retail_customer::Column::SelfHref)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn save(&self, customer: RetailCustomer) -> DomainResult<()> {
        debug!("Saving retail customer: {}", customer.resource.id);
        let model = retail_customer::ActiveModel {
            id: Set(customer.resource.id),
            description: Set(customer.resource.description),
            published: Set(customer.resource.published),
            updated: Set(customer.resource.updated),
            self_href: Set(customer.resource.self_href),
            up_href: Set(customer.resource.up_href),
            username: Set(customer.username),
            first_name: Set(customer.first_name),
            last_name: Set(customer.last_name),
            enabled: Set(customer.enabled),
            role: Set(customer.role),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
