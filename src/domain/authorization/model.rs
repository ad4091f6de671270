//! Authorization domain entity and its coded domains

use uuid::Uuid;

use crate::domain::codes::{coded_enum, string_coded_enum};
use crate::domain::resource::{impl_identity_eq, Resource};
use crate::domain::values::DateTimeInterval;

pub const RESOURCE: &str = "Authorization";

coded_enum! {
    /// Lifecycle state of an access grant.
    AuthorizationStatus("AuthorizationStatus") {
        Revoked = 0,
        Active = 1,
        Denied = 2,
    }
}

string_coded_enum! {
    /// OAuth token type.
    TokenType("TokenType") {
        Bearer = "Bearer",
    }
}

string_coded_enum! {
    /// OAuth grant type used to obtain the authorization.
    GrantType("GrantType") {
        AuthorizationCode = "authorization_code",
        ClientCredentials = "client_credentials",
        RefreshToken = "refresh_token",
    }
}

/// An access grant from a retail customer to a registered application.
#[derive(Debug, Clone)]
pub struct Authorization {
    pub resource: Resource,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub token_type: Option<TokenType>,
    pub grant_type: Option<GrantType>,
    pub scope: Option<String>,
    pub status: AuthorizationStatus,
    /// Seconds since the Unix epoch.
    pub expires_at: Option<i64>,
    /// Period the customer authorized data for.
    pub authorized_period: Option<DateTimeInterval>,
    /// Period for which data has actually been published.
    pub published_period: Option<DateTimeInterval>,
    /// OAuth error token and human-readable detail, set when the grant
    /// failed.
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub resource_uri: Option<String>,
    pub authorization_uri: Option<String>,
    pub third_party: Option<String>,
    pub retail_customer_id: Option<Uuid>,
    pub application_information_id: Option<Uuid>,
}

impl_identity_eq!(Authorization);

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        for &s in AuthorizationStatus::ALL {
            assert_eq!(AuthorizationStatus::resolve(s.code()).unwrap(), s);
        }
    }

    #[test]
    fn unknown_status_code_is_rejected() {
        assert!(AuthorizationStatus::resolve(7).is_err());
    }

    #[test]
    fn grant_type_tokens() {
        assert_eq!(GrantType::AuthorizationCode.code(), "authorization_code");
        assert_eq!(
            GrantType::resolve("refresh_token").unwrap(),
            GrantType::RefreshToken
        );
    }
}
