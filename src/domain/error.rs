//! Domain errors

use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not found: {resource} with id={id}")]
    NotFound { resource: &'static str, id: String },

    /// An enumeration code outside its closed set. Never coerced to a
    /// default; callers must surface it.
    #[error("Unknown {domain} code: {code}")]
    InvalidCode { domain: &'static str, code: String },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn invalid_code(domain: &'static str, code: impl ToString) -> Self {
        Self::InvalidCode {
            domain,
            code: code.to_string(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
