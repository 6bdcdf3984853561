use crate::error::ApiResult;
use crate::AppState;
use axum::extract::State;
use axum::Json;
use kennel_store::StyleStore;
use serde_json::{json, Value};

pub async fn get(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let settings = state.catalog.settings().await?;
    Ok(Json(json!({ "settings": settings })))
}
