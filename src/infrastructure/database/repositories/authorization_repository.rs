//! SeaORM implementation of AuthorizationRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::domain::authorization::{
    Authorization, AuthorizationRepository, AuthorizationStatus, GrantType, TokenType,
};
use crate::domain::values::DateTimeInterval;
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::authorization;

use super::{db_err, resource_from_columns};

pub struct SeaOrmAuthorizationRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorizationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn interval_from_columns(start: Option<i64>, duration: Option<i64>) -> Option<DateTimeInterval> {
    match (start, duration) {
        (Some(start), Some(duration)) => Some(DateTimeInterval::new(start, duration)),
        _ => None,
    }
}

fn model_to_domain(m: authorization::Model) -> DomainResult<Authorization> {
    Ok(Authorization {
        resource: resource_from_columns(
            m.id,
            m.description,
            m.published,
            m.updated,
            m.self_href,
            m.up_href,
        ),
        access_token: m.access_token,
        refresh_token: m.refresh_token,
        token_type: m
            .token_type
            .as_deref()
            .map(TokenType::resolve)
            .transpose()?,
        grant_type: m
            .grant_type
            .as_deref()
            .map(GrantType::resolve)
            .transpose()?,
        scope: m.scope,
        status: AuthorizationStatus::resolve(m.status)?,
        expires_at: m.expires_at,
        authorized_period: interval_from_columns(
            m.authorized_period_start,
            m.authorized_period_duration,
        ),
        published_period: interval_from_columns(
            m.published_period_start,
            m.published_period_duration,
        ),
        error: m.error,
        error_description: m.error_description,
        resource_uri: m.resource_uri,
        authorization_uri: m.authorization_uri,
        third_party: m.third_party,
        retail_customer_id: m.retail_customer_id,
        application_information_id: m.application_information_id,
    })
}

#[async_trait]
impl AuthorizationRepository for SeaOrmAuthorizationRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Authorization>> {
        let model = authorization::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Authorization>> {
        let models = authorization::Entity::find()
            .order_by_asc(authorization::Column::SelfHref)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn save(&self, authorization: Authorization) -> DomainResult<()> {
        debug!("Saving authorization: {}", authorization.resource.id);
        let model = authorization::ActiveModel {
            id: Set(authorization.resource.id),
            description: Set(authorization.resource.description),
            published: Set(authorization.resource.published),
            updated: Set(authorization.resource.updated),
            self_href: Set(authorization.resource.self_href),
            up_href: Set(authorization.resource.up_href),
            status: Set(authorization.status.code()),
            authorized_period_start: Set(authorization.authorized_period.map(|p| p.start)),
            authorized_period_duration: Set(authorization.authorized_period.map(|p| p.duration)),
            published_period_start: Set(authorization.published_period.map(|p| p.start)),
            published_period_duration: Set(authorization.published_period.map(|p| p.duration)),
            expires_at: Set(authorization.expires_at),
            scope: Set(authorization.scope),
            access_token: Set(authorization.access_token),
            refresh_token: Set(authorization.refresh_token),
            token_type: Set(authorization.token_type.map(|t| t.code().to_string())),
            grant_type: Set(authorization.grant_type.map(|g| g.code().to_string())),
            error: Set(authorization.error),
            error_description: Set(authorization.error_description),
            resource_uri: Set(authorization.resource_uri),
            authorization_uri: Set(authorization.authorization_uri),
            third_party: Set(authorization.third_party),
            retail_customer_id: Set(authorization.retail_customer_id),
            application_information_id: Set(authorization.application_information_id),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
