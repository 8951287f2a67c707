//! Pc REST handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use tracing::debug;

use flashapp_entity::pc::Pc;

use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// Entity name used in alert headers and error details.
pub const ENTITY_NAME: &str = "flashAppPc";

fn alert_error(state: &AppState) -> impl Fn(flashapp_core::AppError) -> ApiError + '_ {
    move |e| ApiError::alert(e, &state.alerts, ENTITY_NAME)
}

/// POST /api/pcs
pub async fn create_pc(
    State(state): State<AppState>,
    JsonBody(pc): JsonBody<Pc>,
) -> Result<(StatusCode, HeaderMap, Json<Pc>), ApiError> {
    debug!(%pc, "REST request to save Pc");
    let result = state
        .pc_service
        .create(pc)
        .await
        .map_err(alert_error(&state))?;

    let id = result.id().unwrap_or_default();
    let mut headers = state.alerts.entity_created(ENTITY_NAME, id);
    if let Ok(location) = HeaderValue::from_str(&format!("/api/pcs/{id}")) {
        headers.insert(LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(result)))
}

/// PUT /api/pcs/{id}
pub async fn update_pc(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(pc): JsonBody<Pc>,
) -> Result<(HeaderMap, Json<Pc>), ApiError> {
    debug!(%id, %pc, "REST request to update Pc");
    let result = state
        .pc_service
        .update(&id, pc)
        .await
        .map_err(alert_error(&state))?;

    Ok((state.alerts.entity_updated(ENTITY_NAME, &id), Json(result)))
}

/// PATCH /api/pcs/{id}
///
/// Accepts `application/json` and `application/merge-patch+json`.
pub async fn partial_update_pc(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(pc): JsonBody<Pc>,
) -> Result<(HeaderMap, Json<Pc>), ApiError> {
    debug!(%id, %pc, "REST request to partially update Pc");
    let result = state
        .pc_service
        .partial_update(&id, pc)
        .await
        .map_err(alert_error(&state))?;

    Ok((state.alerts.entity_updated(ENTITY_NAME, &id), Json(result)))
}

/// GET /api/pcs
pub async fn get_all_pcs(State(state): State<AppState>) -> Result<Json<Vec<Pc>>, ApiError> {
    debug!("REST request to get all Pcs");
    Ok(Json(state.pc_service.find_all().await?))
}

/// GET /api/pcs/{id}
pub async fn get_pc(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Pc>, ApiError> {
    debug!(%id, "REST request to get Pc");
    Ok(Json(state.pc_service.find_one(&id).await?))
}

/// DELETE /api/pcs/{id}
pub async fn delete_pc(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    debug!(%id, "REST request to delete Pc");
    state.pc_service.delete(&id).await?;

    Ok((
        StatusCode::NO_CONTENT,
        state.alerts.entity_deleted(ENTITY_NAME, &id),
    ))
}
