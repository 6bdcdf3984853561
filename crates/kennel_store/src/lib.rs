//! Kennel Style Catalog
//!
//! Storage for themes, button presets and the settings singleton.
//!
//! - [`StyleStore`]: the document-store interface the style lookups consume
//! - [`Catalog`]: an in-memory [`StyleStore`] with atomic apply and optional
//!   JSON snapshot persistence
//! - [`lookup`]: resolves the active records named by settings, degrading to
//!   `None` on any failure
//!
//! ```rust
//! use kennel_store::{lookup, Catalog, ThemeDraft};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let catalog = Catalog::new();
//! let theme = catalog
//!     .create_theme(ThemeDraft {
//!         name: "Dusk".into(),
//!         slug: "dusk".into(),
//!         ..ThemeDraft::default()
//!     })
//!     .await
//!     .unwrap();
//! assert_eq!(lookup::active_theme_css(&catalog).await, None);
//!
//! catalog.apply_theme(theme.id).await.unwrap();
//! assert!(lookup::active_theme_css(&catalog).await.is_some());
//! # });
//! ```

pub mod catalog;
pub mod drafts;
pub mod error;
pub mod lookup;
pub mod snapshot;

pub use catalog::{Catalog, Patched, SEED_PRESET_SLUG, SEED_THEME_SLUG};
pub use drafts::{normalize_slug, PresetDraft, PresetPatch, SettingsPatch, ThemeDraft, ThemePatch};
pub use error::{Result, StoreError};
pub use snapshot::CatalogSnapshot;

use async_trait::async_trait;
use kennel_theme::{ButtonPreset, Settings, Theme};

/// Document store holding style records and the settings singleton
#[async_trait]
pub trait StyleStore: Send + Sync + 'static {
    /// Any theme with this slug, active or not
    async fn find_theme_by_slug(&self, slug: &str) -> Result<Option<Theme>>;

    /// An `isActive` button preset with this slug
    async fn find_active_button_preset_by_slug(&self, slug: &str) -> Result<Option<ButtonPreset>>;

    async fn settings(&self) -> Result<Settings>;

    /// Merge `patch` into the settings singleton, creating it if needed
    async fn upsert_settings(&self, patch: SettingsPatch) -> Result<Settings>;
}
