//! Create and patch payloads
//!
//! Drafts carry the fields of a record being created; patches carry any
//! subset of fields of an existing record. Both deserialize from the camelCase
//! JSON the admin editor sends.

use crate::error::{Result, StoreError};
use kennel_theme::{
    ButtonShape, NavbarStyle, PresetColors, PresetSizes, ThemeColors, ThemeStyles, Typography,
};
use serde::Deserialize;

/// Normalize a slug: trim, lowercase, then require `[a-z0-9-]+`
pub fn normalize_slug(raw: &str) -> Result<String> {
    let slug = raw.trim().to_lowercase();
    if slug.is_empty() {
        return Err(StoreError::InvalidInput("slug is required".into()));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(StoreError::InvalidInput(format!(
            "slug {slug:?} may only contain a-z, 0-9 and '-'"
        )));
    }
    Ok(slug)
}

pub(crate) fn require_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::InvalidInput("name is required".into()));
    }
    Ok(name.to_string())
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub colors: Option<ThemeColors>,
    #[serde(default)]
    pub typography: Option<Typography>,
    #[serde(default)]
    pub styles: Option<ThemeStyles>,
    #[serde(default, rename = "customCSS")]
    pub custom_css: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub colors: Option<ThemeColors>,
    pub typography: Option<Typography>,
    pub styles: Option<ThemeStyles>,
    #[serde(rename = "customCSS")]
    pub custom_css: Option<String>,
    pub is_active: Option<bool>,
    pub is_default: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub colors: Option<PresetColors>,
    #[serde(default)]
    pub sizes: Option<PresetSizes>,
    #[serde(default)]
    pub border_radius: Option<ButtonShape>,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub colors: Option<PresetColors>,
    pub sizes: Option<PresetSizes>,
    pub border_radius: Option<ButtonShape>,
    pub is_active: Option<bool>,
    pub is_default: Option<bool>,
}

/// Partial settings update from outside the catalog.
///
/// Only site-level fields are patchable. The active slugs and their echoes
/// change solely through apply and clear, together with the `isDefault` flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub site_name: Option<String>,
}

impl SettingsPatch {
    pub(crate) fn apply_to(self, settings: &mut kennel_theme::Settings) {
        if let Some(site_name) = self.site_name {
            settings.site_name = site_name;
        }
    }
}
