//! Theme admin endpoints

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kennel_store::{ThemeDraft, ThemePatch};
use kennel_theme::RecordId;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyThemeRequest {
    pub theme_id: Option<u64>,
}

pub async fn list(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "themes": state.catalog.list_themes().await }))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ThemeDraft>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    if draft.name.trim().is_empty() || draft.slug.trim().is_empty() {
        return Err(ApiError::BadRequest("Name and slug are required".into()));
    }
    let theme = state.catalog.create_theme(draft).await?;
    Ok((StatusCode::CREATED, Json(json!({ "theme": theme }))))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Json<Value>> {
    let theme = state.catalog.get_theme(RecordId(id)).await?;
    Ok(Json(json!({ "theme": theme })))
}

/// Patch a theme. `isActive` in the response tells the editor whether the
/// saved theme is the one in effect, i.e. whether to emit a refresh.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<ThemePatch>,
) -> ApiResult<Json<Value>> {
    let patched = state.catalog.update_theme(RecordId(id), patch).await?;
    Ok(Json(json!({
        "theme": patched.record,
        "isActive": patched.is_active,
    })))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Json<Value>> {
    state.catalog.delete_theme(RecordId(id)).await?;
    Ok(Json(json!({ "message": "Theme deleted successfully" })))
}

pub async fn apply(
    State(state): State<AppState>,
    Json(request): Json<ApplyThemeRequest>,
) -> ApiResult<Json<Value>> {
    let id = request
        .theme_id
        .ok_or_else(|| ApiError::BadRequest("Theme ID is required".into()))?;
    let theme = state.catalog.apply_theme(RecordId(id)).await?;
    Ok(Json(json!({
        "message": "Theme applied successfully",
        "theme": { "id": theme.id, "slug": theme.slug, "name": theme.name },
    })))
}
