//! ApplicationInformation domain entity

use crate::domain::authorization::{GrantType, TokenType};
use crate::domain::resource::{impl_identity_eq, Resource};

pub const RESOURCE: &str = "ApplicationInformation";

/// OAuth client registration record for a third-party application.
#[derive(Debug, Clone)]
pub struct ApplicationInformation {
    pub resource: Resource,
    pub client_id: String,
    pub client_secret: Option<String>,
    pub client_name: Option<String>,
    /// Seconds since the Unix epoch.
    pub client_id_issued_at: Option<i64>,
    /// Seconds since the Unix epoch; 0 means the secret never expires.
    pub client_secret_expires_at: Option<i64>,
    pub third_party_application_description: Option<String>,
    pub third_party_notify_uri: Option<String>,
    pub redirect_uri: Option<String>,
    pub token_endpoint_auth_method: Option<String>,
    /// Space-separated OAuth scope tokens.
    pub scope: Option<String>,
    pub grant_types: Vec<GrantType>,
    pub token_type: Option<TokenType>,
    pub authorization_server_uri: Option<String>,
    pub authorization_server_authorization_endpoint: Option<String>,
    pub authorization_server_token_endpoint: Option<String>,
    pub data_custodian_id: Option<String>,
    pub data_custodian_resource_endpoint: Option<String>,
}

impl_identity_eq!(ApplicationInformation);
