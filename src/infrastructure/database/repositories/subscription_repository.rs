//! SeaORM implementation of SubscriptionRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::domain::subscription::{Subscription, SubscriptionRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::subscription;

use super::{db_err, resource_from_columns};

pub struct SeaOrmSubscriptionRepository {
    db: DatabaseConnection,
}

impl SeaOrmSubscriptionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: subscription::Model) -> Subscription {
    Subscription {
        resource: resource_from_columns(
            m.id,
            m.description,
            m.published,
            m.updated,
            m.self_href,
            m.up_href,
        ),
        hashed_id: m.hashed_id,
        last_update: m.last_update,
        retail_customer_id: m.retail_customer_id,
        authorization_id: m.authorization_id,
        application_information_id: m.application_information_id,
    }
}

#[async_trait]
impl SubscriptionRepository for SeaOrmSubscriptionRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Subscription>> {
        let model = subscription::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Subscription>> {
        let models = subscription::Entity::find()
            .order_by_asc(subscription::Column::SelfHref)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn save(&self, subscription: Subscription) -> DomainResult<()> {
        debug!("Saving subscription: {}", subscription.resource.id);
        let model = subscription::ActiveModel {
            id: Set(subscription.resource.id),
            description: Set(subscription.resource.description),
            published: Set(subscription.resource.published),
            updated: Set(subscription.resource.updated),
            self_href: Set(subscription.resource.self_href),
            up_href: Set(subscription.resource.up_href),
            hashed_id: Set(subscription.hashed_id),
            last_update: Set(subscription.last_update),
            authorization_id: Set(subscription.authorization_id),
            retail_customer_id: Set(subscription.retail_customer_id),
            application_information_id: Set(subscription.application_information_id),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
