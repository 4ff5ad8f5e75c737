//! API error handling
//!
//! Every failure is rendered as `{ "success": false, "message": ..., "error"?: ... }`.

use std::any::Any;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::PortError;
use domain_claims::ClaimError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ClaimError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Claim store is not configured")]
    NotConfigured(String),

    #[error("{message}")]
    Storage { message: String, detail: String },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Wraps a store failure with a message describing what was attempted
    pub fn storage(message: impl Into<String>, err: PortError) -> Self {
        match err {
            PortError::NotConfigured { message } => ApiError::NotConfigured(message),
            PortError::NotFound { entity_type, id } => {
                ApiError::NotFound(format!("{entity_type} {id} not found"))
            }
            other => ApiError::Storage {
                message: message.into(),
                detail: other.to_string(),
            },
        }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NotConfigured(_) | ApiError::Storage { .. } | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            ApiError::NotConfigured(reason) => Some(reason.clone()),
            ApiError::Storage { detail, .. } => Some(detail.clone()),
            _ => None,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            message: self.to_string(),
            error: self.detail(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        ApiError::storage("Claim store error", err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(format!("Invalid query: {}", rejection.body_text()))
    }
}

/// Renders a caught handler panic as a 500 envelope
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());
    error!(panic = %detail, "Handler panicked");

    ApiError::Internal("Unexpected server error".to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::from(ClaimError::MissingFields(vec!["fullName"]));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing required fields: fullName");
        assert!(err.detail().is_none());
    }

    #[test]
    fn test_unconfigured_store_maps_to_500() {
        let err = ApiError::from(PortError::not_configured("no url"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Claim store is not configured");
        assert_eq!(err.detail().as_deref(), Some("no url"));
    }

    #[test]
    fn test_store_failure_keeps_detail() {
        let err = ApiError::storage("Failed to save claim", PortError::connection("refused"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to save claim");
        assert!(err.detail().unwrap().contains("refused"));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(PortError::not_found("Claim", "GW-000001"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
