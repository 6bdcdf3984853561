//! Kennel Style Server
//!
//! HTTP surface over a [`Catalog`]:
//!
//! - public, unauthenticated: the active theme and button preset
//!   stylesheets and per-slug preset lookups
//! - admin: CRUD and apply for themes and button presets, guarded by a
//!   bearer token when one is configured
//!
//! ```text
//! GET    /healthz
//! GET    /api/themes/active-css
//! GET    /api/button-presets/active-css
//! GET    /api/button-presets/by-slug/:slug
//! GET    /api/themes                      POST /api/themes
//! GET    /api/themes/:id                  PATCH, DELETE /api/themes/:id
//! POST   /api/themes/apply                { themeId }
//! GET    /api/button-presets              POST /api/button-presets
//! GET    /api/button-presets/:id          PATCH, DELETE /api/button-presets/:id
//! POST   /api/button-presets/apply        { presetId }
//! POST   /api/button-presets/clear
//! GET    /api/settings
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;

pub use config::KennelConfig;
pub use error::{ApiError, ApiResult};

use axum::routing::{get, post};
use axum::Router;
use handlers::{button_presets, settings, style, themes};
use kennel_store::Catalog;
use std::sync::Arc;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub admin_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            admin_token: None,
        }
    }

    pub fn with_admin_token(mut self, token: Option<String>) -> Self {
        self.admin_token = token.filter(|t| !t.is_empty()).map(Arc::from);
        self
    }
}

pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/api/themes/active-css", get(style::active_theme_css))
        .route(
            "/api/button-presets/active-css",
            get(style::active_button_preset_css),
        )
        .route(
            "/api/button-presets/by-slug/:slug",
            get(style::button_preset_by_slug),
        );

    let admin = Router::new()
        .route("/api/themes", get(themes::list).post(themes::create))
        .route("/api/themes/apply", post(themes::apply))
        .route(
            "/api/themes/:id",
            get(themes::get).patch(themes::update).delete(themes::delete),
        )
        .route(
            "/api/button-presets",
            get(button_presets::list).post(button_presets::create),
        )
        .route("/api/button-presets/apply", post(button_presets::apply))
        .route("/api/button-presets/clear", post(button_presets::clear))
        .route(
            "/api/button-presets/:id",
            get(button_presets::get)
                .patch(button_presets::update)
                .delete(button_presets::delete),
        )
        .route("/api/settings", get(settings::get))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_admin,
        ));

    public
        .merge(admin)
        .layer(axum::middleware::from_fn(middleware::trace_requests))
        .with_state(state)
}
