//! Active-style lookup
//!
//! Resolves the records named by the settings singleton. Nothing here
//! fails: a missing slug, a deleted or deactivated record, and a store error
//! all come back as `None`, so the public site renders with framework
//! defaults instead of an error page.

use crate::StyleStore;
use kennel_theme::{button_preset_css, theme_css, ButtonPreset, Settings, Theme};

/// The active theme, if settings name one that exists and is active
pub async fn resolve_active_theme<S>(settings: &Settings, store: &S) -> Option<Theme>
where
    S: StyleStore + ?Sized,
{
    let slug = settings.active_theme.as_deref()?;
    match store.find_theme_by_slug(slug).await {
        Ok(Some(theme)) if theme.is_active => Some(theme),
        Ok(_) => {
            tracing::debug!(slug, "active theme missing or inactive");
            None
        }
        Err(err) => {
            tracing::warn!(slug, error = %err, "active theme lookup failed");
            None
        }
    }
}

/// The active global button preset, if settings name one that exists and is active
pub async fn resolve_active_button_preset<S>(settings: &Settings, store: &S) -> Option<ButtonPreset>
where
    S: StyleStore + ?Sized,
{
    let slug = settings.active_button_preset.as_deref()?;
    find_button_preset(store, slug).await
}

/// An active button preset by slug, for per-instance overrides
pub async fn find_button_preset<S>(store: &S, slug: &str) -> Option<ButtonPreset>
where
    S: StyleStore + ?Sized,
{
    match store.find_active_button_preset_by_slug(slug).await {
        Ok(Some(preset)) if preset.is_active => Some(preset),
        Ok(_) => {
            tracing::debug!(slug, "button preset missing or inactive");
            None
        }
        Err(err) => {
            tracing::warn!(slug, error = %err, "button preset lookup failed");
            None
        }
    }
}

async fn current_settings<S>(store: &S) -> Option<Settings>
where
    S: StyleStore + ?Sized,
{
    store
        .settings()
        .await
        .map_err(|err| tracing::warn!(error = %err, "settings lookup failed"))
        .ok()
}

/// Stylesheet of the active theme, or `None` when nothing applies
pub async fn active_theme_css<S>(store: &S) -> Option<String>
where
    S: StyleStore + ?Sized,
{
    let settings = current_settings(store).await?;
    let theme = resolve_active_theme(&settings, store).await?;
    theme_css(&theme)
        .map_err(|err| tracing::warn!(slug = %theme.slug, error = %err, "theme stylesheet failed"))
        .ok()
}

/// Stylesheet of the active global button preset, or `None` when nothing applies
pub async fn active_button_preset_css<S>(store: &S) -> Option<String>
where
    S: StyleStore + ?Sized,
{
    let settings = current_settings(store).await?;
    let preset = resolve_active_button_preset(&settings, store).await?;
    Some(button_preset_css(&preset))
}
