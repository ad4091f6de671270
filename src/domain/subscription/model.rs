//! Subscription domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::resource::{impl_identity_eq, Resource};

pub const RESOURCE: &str = "Subscription";

/// A third party's standing subscription to a customer's data. All
/// cross-references are non-owning.
#[derive(Debug, Clone)]
pub struct Subscription {
    pub resource: Resource,
    /// Opaque identifier handed to the third party in place of the
    /// customer's real id.
    pub hashed_id: Option<String>,
    pub last_update: DateTime<Utc>,
    pub retail_customer_id: Option<Uuid>,
    pub authorization_id: Option<Uuid>,
    pub application_information_id: Option<Uuid>,
}

impl_identity_eq!(Subscription);
