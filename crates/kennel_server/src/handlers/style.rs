//! Public stylesheet endpoints
//!
//! These never fail: lookup and generation problems degrade to `css: null`.

use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kennel_store::lookup;
use kennel_theme::{button_preset_css, CssResponse, PresetCssResponse};

pub async fn active_theme_css(State(state): State<AppState>) -> Json<CssResponse> {
    Json(CssResponse {
        css: lookup::active_theme_css(state.catalog.as_ref()).await,
    })
}

pub async fn active_button_preset_css(State(state): State<AppState>) -> Json<CssResponse> {
    Json(CssResponse {
        css: lookup::active_button_preset_css(state.catalog.as_ref()).await,
    })
}

pub async fn button_preset_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> (StatusCode, Json<PresetCssResponse>) {
    match lookup::find_button_preset(state.catalog.as_ref(), &slug).await {
        Some(preset) => (
            StatusCode::OK,
            Json(PresetCssResponse::found(button_preset_css(&preset), &preset)),
        ),
        None => (StatusCode::NOT_FOUND, Json(PresetCssResponse::not_found())),
    }
}
