//! SeaORM implementation of ApplicationInformationRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::domain::application_information::{
    ApplicationInformation, ApplicationInformationRepository,
};
use crate::domain::authorization::{GrantType, TokenType};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::application_information;

use super::{db_err, resource_from_columns};

pub struct SeaOrmApplicationInformationRepository {
    db: DatabaseConnection,
}

impl SeaOrmApplicationInformationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: application_information::Model) -> DomainResult<ApplicationInformation> {
    let grant_types = m
        .grant_types
        .as_deref()
        .map(|s| {
            s.split_whitespace()
                .map(GrantType::resolve)
                .collect::<DomainResult<Vec<_>>>()
        })
        .transpose()?
        .unwrap_or_default();

    Ok(ApplicationInformation {
        resource: resource_from_columns(
            m.id,
            m.description,
            m.published,
            m.updated,
            m.self_href,
            m.up_href,
        ),
        client_id: m.client_id,
        client_secret: m.client_secret,
        client_name: m.client_name,
        client_id_issued_at: m.client_id_issued_at,
        client_secret_expires_at: m.client_secret_expires_at,
        third_party_application_description: m.third_party_application_description,
        third_party_notify_uri: m.third_party_notify_uri,
        redirect_uri: m.redirect_uri,
        token_endpoint_auth_method: m.token_endpoint_auth_method,
        scope: m.scope,
        grant_types,
        token_type: m
            .token_type
            .as_deref()
            .map(TokenType::resolve)
            .transpose()?,
        authorization_server_uri: m.authorization_server_uri,
        authorization_server_authorization_endpoint: m
            .authorization_server_authorization_endpoint,
        authorization_server_token_endpoint: m.authorization_server_token_endpoint,
        data_custodian_id: m.data_custodian_id,
        data_custodian_resource_endpoint: m.data_custodian_resource_endpoint,
    })
}

#[async_trait]
impl ApplicationInformationRepository for SeaOrmApplicationInformationRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ApplicationInformation>> {
        let model = application_information::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<ApplicationInformation>> {
        let models = application_information::Entity::find()
            .order_by_asc(application_information::Column::SelfHref)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn save(&self, info: ApplicationInformation) -> DomainResult<()> {
        debug!("Saving application information: {}", info.resource.id);
        let grant_types = if info.grant_types.is_empty() {
            None
        } else {
            Some(
                info.grant_types
                    .iter()
                    .map(|g| g.code())
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        };
        let model = application_information::ActiveModel {
            id: Set(info.resource.id),
            description: Set(info.resource.description),
            published: Set(info.resource.published),
            updated: Set(info.resource.updated),
            self_href: Set(info.resource.self_href),
            up_href: Set(info.resource.up_href),
            client_id: Set(info.client_id),
            client_secret: Set(info.client_secret),
            client_name: Set(info.client_name),
            client_id_issued_at: Set(info.client_id_issued_at),
            client_secret_expires_at: Set(info.client_secret_expires_at),
            third_party_application_description: Set(info.third_party_application_description),
            third_party_notify_uri: Set(info.third_party_notify_uri),
            redirect_uri: Set(info.redirect_uri),
            token_endpoint_auth_method: Set(info.token_endpoint_auth_method),
            scope: Set(info.scope),
            grant_types: Set(grant_types),
            token_type: Set(info.token_type.map(|t| t.code().to_string())),
            authorization_server_uri: Set(info.authorization_server_uri),
            authorization_server_authorization_endpoint: Set(
                info.authorization_server_authorization_endpoint
            ),
            authorization_server_token_endpoint: Set(info.authorization_server_token_endpoint),
            data_custodian_id: Set(info.data_custodian_id),
            data_custodian_resource_endpoint: Set(info.data_custodian_resource_endpoint),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
