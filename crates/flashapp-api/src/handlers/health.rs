//! Health check handler.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use flashapp_core::error::AppError;
use flashapp_core::result::AppResult;

use crate::error::ApiError;
use crate::state::AppState;

/// Health report body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `UP`; a down store answers 503 with the error body.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Store provider name.
    pub database: String,
    /// Store status.
    pub database_status: String,
}

/// GET /api/health
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let up = match state.store.health_check().await {
        Ok(up) => up,
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            false
        }
    };

    Ok(Json(health_report(state.store.provider_name(), up)?))
}

fn health_report(provider: &str, up: bool) -> AppResult<HealthResponse> {
    if !up {
        return Err(AppError::service_unavailable(format!(
            "Store '{provider}' is unavailable"
        )));
    }

    Ok(HealthResponse {
        status: "UP".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: provider.to_string(),
        database_status: "UP".to_string(),
    })
}
