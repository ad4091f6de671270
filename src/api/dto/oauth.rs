//! Subscription, Authorization and ApplicationInformation JSON DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::application_information::ApplicationInformation;
use crate::domain::authorization::Authorization;
use crate::domain::subscription::Subscription;

use super::customer::ResourceDto;

/// Third-party standing subscription to a customer's data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDto {
    pub resource: ResourceDto,
    /// Opaque identifier handed to the third party in place of the
    /// customer's real id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashed_id: Option<String>,
    pub last_update: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_customer_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_information_id: Option<Uuid>,
}

impl SubscriptionDto {
    pub fn from_domain(s: &Subscription) -> Self {
        Self {
            resource: ResourceDto::from_domain(&s.resource),
            hashed_id: s.hashed_id.clone(),
            last_update: s.last_update,
            retail_customer_id: s.retail_customer_id,
            authorization_id: s.authorization_id,
            application_information_id: s.application_information_id,
        }
    }
}

/// Interval as epoch start plus duration, both in seconds.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDto {
    pub start: i64,
    pub duration: i64,
}

/// Access grant from a retail customer to a registered application.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationDto {
    pub resource: ResourceDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// OAuth token type, e.g. `Bearer`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// OAuth grant type token, e.g. `authorization_code`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// 0 = Revoked, 1 = Active, 2 = Denied
    pub status: i32,
    /// Seconds since the Unix epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_period: Option<PeriodDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_period: Option<PeriodDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_customer_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_information_id: Option<Uuid>,
}

impl AuthorizationDto {
    pub fn from_domain(a: &Authorization) -> Self {
        Self {
            resource: ResourceDto::from_domain(&a.resource),
            access_token: a.access_token.clone(),
            refresh_token: a.refresh_token.clone(),
            token_type: a.token_type.map(|t| t.code().to_string()),
            grant_type: a.grant_type.map(|g| g.code().to_string()),
            scope: a.scope.clone(),
            status: a.status.code(),
            expires_at: a.expires_at,
            authorized_period: a.authorized_period.map(|p| PeriodDto {
                start: p.start,
                duration: p.duration,
            }),
            published_period: a.published_period.map(|p| PeriodDto {
                start: p.start,
                duration: p.duration,
            }),
            error: a.error.clone(),
            error_description: a.error_description.clone(),
            resource_uri: a.resource_uri.clone(),
            authorization_uri: a.authorization_uri.clone(),
            third_party: a.third_party.clone(),
            retail_customer_id: a.retail_customer_id,
            application_information_id: a.application_information_id,
        }
    }
}

/// OAuth client registration of a third-party application. The client
/// secret never leaves the custodian.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInformationDto {
    pub resource: ResourceDto,
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Seconds since the Unix epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id_issued_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret_expires_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party_application_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party_notify_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint_auth_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// OAuth grant type tokens
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub grant_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_server_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_server_authorization_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_server_token_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_custodian_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_custodian_resource_endpoint: Option<String>,
}

impl ApplicationInformationDto {
    pub fn from_domain(info: &ApplicationInformation) -> Self {
        Self {
            resource: ResourceDto::from_domain(&info.resource),
            client_id: info.client_id.clone(),
            client_name: info.client_name.clone(),
            client_id_issued_at: info.client_id_issued_at,
            client_secret_expires_at: info.client_secret_expires_at,
            third_party_application_description: info
                .third_party_application_description
                .clone(),
            third_party_notify_uri: info.third_party_notify_uri.clone(),
            redirect_uri: info.redirect_uri.clone(),
            token_endpoint_auth_method: info.token_endpoint_auth_method.clone(),
            scope: info.scope.clone(),
            grant_types: info
                .grant_types
                .iter()
                .map(|g| g.code().to_string())
                .collect(),
            token_type: info.token_type.map(|t| t.code().to_string()),
            authorization_server_uri: info.authorization_server_uri.clone(),
            authorization_server_authorization_endpoint: info
                .authorization_server_authorization_endpoint
                .clone(),
            authorization_server_token_endpoint: info
                .authorization_server_token_endpoint
                .clone(),
            data_custodian_id: info.data_custodian_id.clone(),
            data_custodian_resource_endpoint: info.data_custodian_resource_endpoint.clone(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::application_information::ApplicationInformation;
    use crate::domain::authorization::GrantType;
    use crate::domain::Resource;
    use chrono::Utc;

    #[test]
    fn client_secret_is_not_projected() {
        let info = ApplicationInformation {
            resource: Resource::from_href(
                "/espi/1_1/resource/ApplicationInformation/1",
                "/espi/1_1/resource/ApplicationInformation",
                None,
                Utc::now(),
                Utc::now(),
            ),
            client_id: "third-party".into(),
            client_secret: Some("secret".into()),
            client_name: None,
            client_id_issued_at: None,
            client_secret_expires_at: None,
            third_party_application_description: None,
            third_party_notify_uri: None,
            redirect_uri: None,
            token_endpoint_auth_method: None,
            scope: None,
            grant_types: vec![GrantType::AuthorizationCode],
            token_type: None,
            authorization_server_uri: None,
            authorization_server_authorization_endpoint: None,
            authorization_server_token_endpoint: None,
            data_custodian_id: None,
            data_custodian_resource_endpoint: None,
        };
        let dto = ApplicationInformationDto::from_domain(&info);
        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("secret"));
        assert_eq!(dto.grant_types, vec!["authorization_code"]);
    }
}
