//! In-memory style catalog
//!
//! Themes, button presets and the settings singleton live in one
//! [`CatalogSnapshot`] behind a single `RwLock`. Every mutation runs against a
//! working copy under the write lock, is persisted if a snapshot path is set,
//! and only then replaces the live state. Readers therefore never observe two
//! defaults of one type, or settings naming a record that is not the default.

use crate::drafts::{
    normalize_slug, require_name, PresetDraft, PresetPatch, SettingsPatch, ThemeDraft, ThemePatch,
};
use crate::error::{Result, StoreError};
use crate::snapshot::{self, CatalogSnapshot};
use crate::StyleStore;
use async_trait::async_trait;
use kennel_theme::{ButtonPreset, RecordId, Settings, Theme, ThemeColors};
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Slug of the theme created by [`Catalog::seed_defaults`]
pub const SEED_THEME_SLUG: &str = "modern-breeder";
/// Slug of the button preset created by [`Catalog::seed_defaults`]
pub const SEED_PRESET_SLUG: &str = "classic";

/// Result of patching a record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patched<T> {
    pub record: T,
    /// The patched record is the one currently in effect
    pub is_active: bool,
}

pub struct Catalog {
    state: RwLock<CatalogSnapshot>,
    snapshot_path: Option<PathBuf>,
}

impl Catalog {
    /// Empty catalog without persistence
    pub fn new() -> Self {
        Self::from_snapshot(CatalogSnapshot::default())
    }

    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
            snapshot_path: None,
        }
    }

    /// Open a catalog persisted at `path`, starting empty if the file is absent
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = snapshot::load(&path).await?.unwrap_or_default();
        tracing::info!(
            path = %path.display(),
            themes = snapshot.themes.len(),
            presets = snapshot.button_presets.len(),
            "opened style catalog"
        );
        Ok(Self {
            state: RwLock::new(snapshot),
            snapshot_path: Some(path),
        })
    }

    /// Copy of the full catalog state
    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.state.read().await.clone()
    }

    async fn mutate<T>(&self, op: impl FnOnce(&mut CatalogSnapshot) -> Result<T>) -> Result<T> {
        let mut state = self.state.write().await;
        let mut working = state.clone();
        let out = op(&mut working)?;
        if let Some(path) = &self.snapshot_path {
            snapshot::save(path, &working).await?;
        }
        *state = working;
        Ok(out)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Themes
    // ─────────────────────────────────────────────────────────────────────────

    /// All themes, default first, then newest first
    pub async fn list_themes(&self) -> Vec<Theme> {
        let mut themes = self.state.read().await.themes.clone();
        themes.sort_by(|a, b| b.is_default.cmp(&a.is_default).then(b.id.cmp(&a.id)));
        themes
    }

    pub async fn get_theme(&self, id: RecordId) -> Result<Theme> {
        let state = self.state.read().await;
        state
            .themes
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("Theme".into()))
    }

    pub async fn create_theme(&self, draft: ThemeDraft) -> Result<Theme> {
        self.mutate(|state| {
            let name = require_name(&draft.name)?;
            let slug = normalize_slug(&draft.slug)?;
            ensure_unique_theme_slug(state, &slug, None)?;
            let colors = draft.colors.unwrap_or_default();
            colors.validate()?;

            let theme = Theme {
                id: state.alloc_id(),
                name,
                slug,
                description: draft.description.unwrap_or_default(),
                colors,
                typography: draft.typography.unwrap_or_default(),
                styles: draft.styles.unwrap_or_default(),
                custom_css: draft.custom_css.filter(|css| !css.trim().is_empty()),
                is_active: true,
                is_default: false,
            };
            let id = theme.id;
            state.themes.push(theme);
            let idx = theme_index(state, id)?;
            if draft.is_default {
                apply_theme_at(state, idx)?;
            }
            tracing::info!(%id, slug = %state.themes[idx].slug, "created theme");
            Ok(state.themes[idx].clone())
        })
        .await
    }

    pub async fn update_theme(&self, id: RecordId, patch: ThemePatch) -> Result<Patched<Theme>> {
        self.mutate(|state| {
            let idx = theme_index(state, id)?;
            let mut theme = state.themes[idx].clone();
            let was_default = theme.is_default;

            if let Some(name) = &patch.name {
                theme.name = require_name(name)?;
            }
            if let Some(slug) = &patch.slug {
                let slug = normalize_slug(slug)?;
                ensure_unique_theme_slug(state, &slug, Some(id))?;
                theme.slug = slug;
            }
            if let Some(description) = patch.description {
                theme.description = description;
            }
            if let Some(colors) = patch.colors {
                colors.validate()?;
                theme.colors = colors;
            }
            if let Some(typography) = patch.typography {
                theme.typography = typography;
            }
            if let Some(styles) = patch.styles {
                theme.styles = styles;
            }
            if let Some(css) = patch.custom_css {
                theme.custom_css = (!css.trim().is_empty()).then_some(css);
            }
            if let Some(active) = patch.is_active {
                if was_default && !active {
                    return Err(StoreError::InvariantViolation(
                        "Cannot deactivate the default theme".into(),
                    ));
                }
                theme.is_active = active;
            }
            if was_default && patch.is_default == Some(false) {
                return Err(StoreError::InvariantViolation(
                    "Apply another theme to replace the default theme".into(),
                ));
            }

            state.themes[idx] = theme;
            if patch.is_default == Some(true) && !was_default {
                apply_theme_at(state, idx)?;
            } else if was_default {
                let theme = state.themes[idx].clone();
                echo_theme(&mut state.settings, &theme);
            }

            let record = state.themes[idx].clone();
            tracing::debug!(%id, slug = %record.slug, is_default = record.is_default, "updated theme");
            Ok(Patched {
                is_active: record.is_default,
                record,
            })
        })
        .await
    }

    pub async fn delete_theme(&self, id: RecordId) -> Result<()> {
        self.mutate(|state| {
            let idx = theme_index(state, id)?;
            if state.themes[idx].is_default {
                return Err(StoreError::InvariantViolation(
                    "Cannot delete the default theme".into(),
                ));
            }
            let theme = state.themes.remove(idx);
            tracing::info!(%id, slug = %theme.slug, "deleted theme");
            Ok(())
        })
        .await
    }

    /// Make a theme the site default and point settings at it, atomically
    pub async fn apply_theme(&self, id: RecordId) -> Result<Theme> {
        self.mutate(|state| {
            let idx = theme_index(state, id)?;
            apply_theme_at(state, idx)?;
            Ok(state.themes[idx].clone())
        })
        .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Button presets
    // ─────────────────────────────────────────────────────────────────────────

    /// All presets, default first, then newest first
    pub async fn list_button_presets(&self) -> Vec<ButtonPreset> {
        let mut presets = self.state.read().await.button_presets.clone();
        presets.sort_by(|a, b| b.is_default.cmp(&a.is_default).then(b.id.cmp(&a.id)));
        presets
    }

    pub async fn get_button_preset(&self, id: RecordId) -> Result<ButtonPreset> {
        let state = self.state.read().await;
        state
            .button_presets
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("Button preset".into()))
    }

    pub async fn create_button_preset(&self, draft: PresetDraft) -> Result<ButtonPreset> {
        self.mutate(|state| {
            let name = require_name(&draft.name)?;
            let slug = normalize_slug(&draft.slug)?;
            ensure_unique_preset_slug(state, &slug, None)?;
            let colors = draft.colors.unwrap_or_default();
            colors.validate()?;

            let preset = ButtonPreset {
                id: state.alloc_id(),
                name,
                slug,
                description: draft.description.unwrap_or_default(),
                colors,
                sizes: draft.sizes.unwrap_or_default(),
                border_radius: draft.border_radius.unwrap_or_default(),
                is_active: true,
                is_default: false,
            };
            let id = preset.id;
            state.button_presets.push(preset);
            let idx = preset_index(state, id)?;
            if draft.is_default {
                apply_preset_at(state, idx)?;
            }
            tracing::info!(%id, slug = %state.button_presets[idx].slug, "created button preset");
            Ok(state.button_presets[idx].clone())
        })
        .await
    }

    pub async fn update_button_preset(
        &self,
        id: RecordId,
        patch: PresetPatch,
    ) -> Result<Patched<ButtonPreset>> {
        self.mutate(|state| {
            let idx = preset_index(state, id)?;
            let mut preset = state.button_presets[idx].clone();
            let was_default = preset.is_default;

            if let Some(name) = &patch.name {
                preset.name = require_name(name)?;
            }
            if let Some(slug) = &patch.slug {
                let slug = normalize_slug(slug)?;
                ensure_unique_preset_slug(state, &slug, Some(id))?;
                preset.slug = slug;
            }
            if let Some(description) = patch.description {
                preset.description = description;
            }
            if let Some(colors) = patch.colors {
                colors.validate()?;
                preset.colors = colors;
            }
            if let Some(sizes) = patch.sizes {
                preset.sizes = sizes;
            }
            if let Some(shape) = patch.border_radius {
                preset.border_radius = shape;
            }
            if let Some(active) = patch.is_active {
                if was_default && !active {
                    return Err(StoreError::InvariantViolation(
                        "Cannot deactivate the default button preset".into(),
                    ));
                }
                preset.is_active = active;
            }
            if was_default && patch.is_default == Some(false) {
                return Err(StoreError::InvariantViolation(
                    "Clear or apply another preset to replace the default button preset".into(),
                ));
            }

            state.button_presets[idx] = preset;
            if patch.is_default == Some(true) && !was_default {
                apply_preset_at(state, idx)?;
            } else if was_default {
                let preset = state.button_presets[idx].clone();
                echo_preset(&mut state.settings, &preset);
            }

            let record = state.button_presets[idx].clone();
            tracing::debug!(%id, slug = %record.slug, is_default = record.is_default, "updated button preset");
            Ok(Patched {
                is_active: record.is_default,
                record,
            })
        })
        .await
    }

    pub async fn delete_button_preset(&self, id: RecordId) -> Result<()> {
        self.mutate(|state| {
            let idx = preset_index(state, id)?;
            if state.button_presets[idx].is_default {
                return Err(StoreError::InvariantViolation(
                    "Cannot delete the default button preset".into(),
                ));
            }
            let preset = state.button_presets.remove(idx);
            tracing::info!(%id, slug = %preset.slug, "deleted button preset");
            Ok(())
        })
        .await
    }

    /// Make a preset the global default and point settings at it, atomically
    pub async fn apply_button_preset(&self, id: RecordId) -> Result<ButtonPreset> {
        self.mutate(|state| {
            let idx = preset_index(state, id)?;
            apply_preset_at(state, idx)?;
            Ok(state.button_presets[idx].clone())
        })
        .await
    }

    /// Remove the global button preset so buttons fall back to the theme shape
    pub async fn clear_button_preset(&self) -> Result<Settings> {
        self.mutate(|state| {
            for preset in &mut state.button_presets {
                preset.is_default = false;
            }
            state.settings.active_button_preset = None;
            tracing::info!("cleared active button preset");
            Ok(state.settings.clone())
        })
        .await
    }

    /// Create and apply the stock theme and preset when their tables are empty.
    ///
    /// Returns true if anything was created.
    pub async fn seed_defaults(&self) -> Result<bool> {
        self.mutate(|state| {
            let mut seeded = false;
            if state.themes.is_empty() {
                let theme = Theme {
                    id: state.alloc_id(),
                    name: "Modern Breeder".into(),
                    slug: SEED_THEME_SLUG.into(),
                    description: "Clean default theme".into(),
                    colors: ThemeColors::default(),
                    ..Theme::default()
                };
                state.themes.push(theme);
                let idx = state.themes.len() - 1;
                apply_theme_at(state, idx)?;
                seeded = true;
            }
            if state.button_presets.is_empty() {
                let preset = ButtonPreset {
                    id: state.alloc_id(),
                    slug: SEED_PRESET_SLUG.into(),
                    ..ButtonPreset::default()
                };
                state.button_presets.push(preset);
                let idx = state.button_presets.len() - 1;
                apply_preset_at(state, idx)?;
                seeded = true;
            }
            if seeded {
                tracing::info!("seeded default theme and button preset");
            }
            Ok(seeded)
        })
        .await
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StyleStore for Catalog {
    async fn find_theme_by_slug(&self, slug: &str) -> Result<Option<Theme>> {
        let state = self.state.read().await;
        Ok(state.themes.iter().find(|t| t.slug == slug).cloned())
    }

    async fn find_active_button_preset_by_slug(&self, slug: &str) -> Result<Option<ButtonPreset>> {
        let state = self.state.read().await;
        Ok(state
            .button_presets
            .iter()
            .find(|p| p.slug == slug && p.is_active)
            .cloned())
    }

    async fn settings(&self) -> Result<Settings> {
        Ok(self.state.read().await.settings.clone())
    }

    async fn upsert_settings(&self, patch: SettingsPatch) -> Result<Settings> {
        self.mutate(|state| {
            patch.apply_to(&mut state.settings);
            Ok(state.settings.clone())
        })
        .await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// State helpers; all run under the write lock
// ─────────────────────────────────────────────────────────────────────────────

fn theme_index(state: &CatalogSnapshot, id: RecordId) -> Result<usize> {
    state
        .themes
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| StoreError::NotFound("Theme".into()))
}

fn preset_index(state: &CatalogSnapshot, id: RecordId) -> Result<usize> {
    state
        .button_presets
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| StoreError::NotFound("Button preset".into()))
}

fn ensure_unique_theme_slug(
    state: &CatalogSnapshot,
    slug: &str,
    except: Option<RecordId>,
) -> Result<()> {
    if state
        .themes
        .iter()
        .any(|t| t.slug == slug && Some(t.id) != except)
    {
        return Err(StoreError::Conflict(
            "A theme with this slug already exists".into(),
        ));
    }
    Ok(())
}

fn ensure_unique_preset_slug(
    state: &CatalogSnapshot,
    slug: &str,
    except: Option<RecordId>,
) -> Result<()> {
    if state
        .button_presets
        .iter()
        .any(|p| p.slug == slug && Some(p.id) != except)
    {
        return Err(StoreError::Conflict(
            "A button preset with this slug already exists".into(),
        ));
    }
    Ok(())
}

fn apply_theme_at(state: &mut CatalogSnapshot, idx: usize) -> Result<()> {
    if !state.themes[idx].is_active {
        return Err(StoreError::InvariantViolation(
            "Cannot apply an inactive theme".into(),
        ));
    }
    for (i, theme) in state.themes.iter_mut().enumerate() {
        theme.is_default = i == idx;
    }
    let theme = state.themes[idx].clone();
    echo_theme(&mut state.settings, &theme);
    tracing::info!(id = %theme.id, slug = %theme.slug, "applied theme");
    Ok(())
}

fn apply_preset_at(state: &mut CatalogSnapshot, idx: usize) -> Result<()> {
    if !state.button_presets[idx].is_active {
        return Err(StoreError::InvariantViolation(
            "Cannot apply an inactive button preset".into(),
        ));
    }
    for (i, preset) in state.button_presets.iter_mut().enumerate() {
        preset.is_default = i == idx;
    }
    let preset = state.button_presets[idx].clone();
    echo_preset(&mut state.settings, &preset);
    tracing::info!(id = %preset.id, slug = %preset.slug, "applied button preset");
    Ok(())
}

fn echo_theme(settings: &mut Settings, theme: &Theme) {
    settings.active_theme = Some(theme.slug.clone());
    settings.primary_color = theme.colors.primary.clone();
    settings.secondary_color = theme.colors.secondary.clone();
    settings.navbar_style = theme.styles.navbar_style;
    settings.button_style = theme.styles.button_style;
}

fn echo_preset(settings: &mut Settings, preset: &ButtonPreset) {
    settings.active_button_preset = Some(preset.slug.clone());
    settings.button_style = preset.border_radius;
}
