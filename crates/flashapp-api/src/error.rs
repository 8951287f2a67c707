//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use flashapp_core::error::{AppError, ErrorKind};

use crate::alert::AlertHeaders;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Entity name and error key for client-input errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// An `AppError` on its way out of a handler, plus any alert headers.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    entity_name: Option<&'static str>,
    headers: HeaderMap,
}

impl ApiError {
    /// Attach failure alert headers when the error carries an error key.
    pub fn alert(error: AppError, alerts: &AlertHeaders, entity_name: &'static str) -> Self {
        let headers = if error.error_key.is_some() {
            alerts.failure(entity_name, &error.message)
        } else {
            HeaderMap::new()
        };
        Self {
            error,
            entity_name: Some(entity_name),
            headers,
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self.error.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::ServiceUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self {
            error,
            entity_name: None,
            headers: HeaderMap::new(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self.error, "Request failed");
        }

        let details = match (&self.error.error_key, self.entity_name) {
            (Some(key), Some(entity)) => Some(serde_json::json!({
                "entityName": entity,
                "errorKey": key,
            })),
            (Some(key), None) => Some(serde_json::json!({ "errorKey": key })),
            _ => None,
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: self.error.message,
            details,
        };

        (status, self.headers, Json(body)).into_response()
    }
}
