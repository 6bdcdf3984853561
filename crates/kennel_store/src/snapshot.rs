//! JSON snapshot persistence
//!
//! The whole catalog is one JSON document. Saves go to a sibling temp file
//! that is renamed over the target, so a crash never leaves a torn file.

use crate::error::{Result, StoreError};
use kennel_theme::{ButtonPreset, RecordId, Settings, Theme};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Everything the catalog stores
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogSnapshot {
    pub themes: Vec<Theme>,
    pub button_presets: Vec<ButtonPreset>,
    pub settings: Settings,
    /// Last id handed out
    pub last_id: u64,
}

impl CatalogSnapshot {
    pub(crate) fn alloc_id(&mut self) -> RecordId {
        let floor = self
            .themes
            .iter()
            .map(|t| t.id.0)
            .chain(self.button_presets.iter().map(|p| p.id.0))
            .max()
            .unwrap_or(0);
        self.last_id = self.last_id.max(floor) + 1;
        RecordId(self.last_id)
    }

    /// Check the default and settings invariants of a loaded snapshot.
    ///
    /// Each type has at most one default, the default is active, and the
    /// settings slug names exactly that default (or nothing when there is none).
    pub fn validate(&self) -> Result<()> {
        let theme = single_default(
            "theme",
            self.themes.iter().map(|t| (t.slug.as_str(), t.is_default, t.is_active)),
        )?;
        check_settings_slug("theme", self.settings.active_theme.as_deref(), theme)?;

        let preset = single_default(
            "button preset",
            self.button_presets
                .iter()
                .map(|p| (p.slug.as_str(), p.is_default, p.is_active)),
        )?;
        check_settings_slug(
            "button preset",
            self.settings.active_button_preset.as_deref(),
            preset,
        )
    }
}

fn single_default<'a>(
    kind: &str,
    records: impl Iterator<Item = (&'a str, bool, bool)>,
) -> Result<Option<&'a str>> {
    let mut found = None;
    for (slug, is_default, is_active) in records {
        if !is_default {
            continue;
        }
        if found.is_some() {
            return Err(StoreError::InvariantViolation(format!(
                "snapshot has more than one default {kind}"
            )));
        }
        if !is_active {
            return Err(StoreError::InvariantViolation(format!(
                "default {kind} {slug:?} is inactive"
            )));
        }
        found = Some(slug);
    }
    Ok(found)
}

fn check_settings_slug(kind: &str, active: Option<&str>, default: Option<&str>) -> Result<()> {
    if active == default {
        return Ok(());
    }
    Err(StoreError::InvariantViolation(format!(
        "settings name {kind} {active:?} but the default is {default:?}"
    )))
}

/// Read and validate a snapshot. A missing file is `Ok(None)`.
pub async fn load(path: &Path) -> Result<Option<CatalogSnapshot>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let snapshot: CatalogSnapshot = serde_json::from_slice(&bytes)?;
    snapshot.validate()?;
    tracing::debug!(path = %path.display(), "loaded catalog snapshot");
    Ok(Some(snapshot))
}

/// Write a snapshot through a temp file and rename
pub async fn save(path: &Path, snapshot: &CatalogSnapshot) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_vec_pretty(snapshot)?;
    let tmp = temp_path(path);
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, path).await?;
    tracing::trace!(path = %path.display(), "saved catalog snapshot");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "catalog.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_id_skips_existing_ids() {
        let mut snapshot = CatalogSnapshot {
            themes: vec![Theme {
                id: RecordId(7),
                ..Theme::default()
            }],
            ..CatalogSnapshot::default()
        };
        assert_eq!(snapshot.alloc_id(), RecordId(8));
        assert_eq!(snapshot.alloc_id(), RecordId(9));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(
            temp_path(Path::new("/data/catalog.json")),
            PathBuf::from("/data/catalog.json.tmp")
        );
    }

    fn theme(slug: &str, is_default: bool) -> Theme {
        Theme {
            slug: slug.into(),
            is_default,
            ..Theme::default()
        }
    }

    #[test]
    fn test_validate_accepts_consistent_snapshot() {
        let mut snapshot = CatalogSnapshot {
            themes: vec![theme("a", true), theme("b", false)],
            ..CatalogSnapshot::default()
        };
        snapshot.settings.active_theme = Some("a".into());
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_two_defaults() {
        let mut snapshot = CatalogSnapshot {
            themes: vec![theme("a", true), theme("b", true)],
            ..CatalogSnapshot::default()
        };
        snapshot.settings.active_theme = Some("a".into());
        assert!(matches!(
            snapshot.validate(),
            Err(StoreError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_settings_naming_non_default() {
        let mut snapshot = CatalogSnapshot {
            themes: vec![theme("a", true), theme("b", false)],
            ..CatalogSnapshot::default()
        };
        snapshot.settings.active_theme = Some("b".into());
        assert!(matches!(
            snapshot.validate(),
            Err(StoreError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inactive_default() {
        let mut snapshot = CatalogSnapshot {
            button_presets: vec![ButtonPreset {
                is_default: true,
                is_active: false,
                ..ButtonPreset::default()
            }],
            ..CatalogSnapshot::default()
        };
        snapshot.settings.active_button_preset = Some("classic".into());
        assert!(matches!(
            snapshot.validate(),
            Err(StoreError::InvariantViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load(&dir.path().join("absent.json")).await.unwrap();
        assert_eq!(loaded, None);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.json");
        let snapshot = CatalogSnapshot {
            button_presets: vec![ButtonPreset::default()],
            last_id: 3,
            ..CatalogSnapshot::default()
        };
        save(&path, &snapshot).await.unwrap();
        assert!(!temp_path(&path).exists());
        assert_eq!(load(&path).await.unwrap(), Some(snapshot));
    }
}
