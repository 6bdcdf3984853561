//! Route handlers

pub mod button_presets;
pub mod settings;
pub mod style;
pub mod themes;

pub async fn healthz() -> &'static str {
    "ok"
}
