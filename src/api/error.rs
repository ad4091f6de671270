//! Domain-to-HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::api::dto::ApiResponse;
use crate::domain::DomainError;

/// Wrapper turning a [`DomainError`] into an HTTP response.
///
/// The read path never accepts external enumeration codes, so an
/// `InvalidCode` here means the stored data itself is bad: it maps to 500,
/// not 4xx. Internals are logged; responses carry sanitized messages only.
pub struct RestError(pub DomainError);

impl From<DomainError> for RestError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::NotFound { resource, id } => {
                (StatusCode::NOT_FOUND, format!("{} {} not found", resource, id))
            }
            DomainError::InvalidCode { domain, code } => {
                error!("stored data carries unknown {} code {}", domain, code);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "stored data is invalid".to_string(),
                )
            }
            DomainError::InvalidValue(detail) => {
                error!("stored data is out of range: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "stored data is invalid".to_string(),
                )
            }
            DomainError::Storage(detail) => {
                error!("storage error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}
