//! RetailCustomer domain entity

use crate::domain::resource::{impl_identity_eq, Resource};

pub const RESOURCE: &str = "RetailCustomer";

/// A customer of the data custodian. Usage points reference it; it owns
/// nothing of the usage aggregate itself.
#[derive(Debug, Clone)]
pub struct RetailCustomer {
    pub resource: Resource,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub enabled: bool,
    pub role: String,
}

impl_identity_eq!(RetailCustomer);
