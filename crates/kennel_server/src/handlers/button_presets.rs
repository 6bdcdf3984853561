//! Button preset admin endpoints

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kennel_store::{PresetDraft, PresetPatch};
use kennel_theme::RecordId;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyPresetRequest {
    pub preset_id: Option<u64>,
}

pub async fn list(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "presets": state.catalog.list_button_presets().await }))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<PresetDraft>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    if draft.name.trim().is_empty() || draft.slug.trim().is_empty() {
        return Err(ApiError::BadRequest("Name and slug are required".into()));
    }
    let preset = state.catalog.create_button_preset(draft).await?;
    Ok((StatusCode::CREATED, Json(json!({ "preset": preset }))))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Json<Value>> {
    let preset = state.catalog.get_button_preset(RecordId(id)).await?;
    Ok(Json(json!({ "preset": preset })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<PresetPatch>,
) -> ApiResult<Json<Value>> {
    let patched = state
        .catalog
        .update_button_preset(RecordId(id), patch)
        .await?;
    Ok(Json(json!({
        "preset": patched.record,
        "isActive": patched.is_active,
    })))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Json<Value>> {
    state.catalog.delete_button_preset(RecordId(id)).await?;
    Ok(Json(json!({ "message": "Button preset deleted successfully" })))
}

pub async fn apply(
    State(state): State<AppState>,
    Json(request): Json<ApplyPresetRequest>,
) -> ApiResult<Json<Value>> {
    let id = request
        .preset_id
        .ok_or_else(|| ApiError::BadRequest("Preset ID is required".into()))?;
    let preset = state.catalog.apply_button_preset(RecordId(id)).await?;
    Ok(Json(json!({
        "message": "Button preset applied successfully",
        "preset": { "id": preset.id, "slug": preset.slug, "name": preset.name },
        "settings": { "activeButtonPreset": preset.slug },
    })))
}

pub async fn clear(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let settings = state.catalog.clear_button_preset().await?;
    Ok(Json(json!({
        "message": "Button preset cleared",
        "settings": settings,
    })))
}
