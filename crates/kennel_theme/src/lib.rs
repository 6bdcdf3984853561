//! Kennel Theme System
//!
//! Stored style records and everything derived from them.
//!
//! # Overview
//!
//! - **Records**: [`Theme`], [`ButtonPreset`] and the [`Settings`] singleton
//! - **Style resolver**: [`theme_css`] and [`button_preset_css`] turn records
//!   into the stylesheet text served to the public site
//! - **Scoping**: [`scope_preset_css`] retargets a preset stylesheet to the
//!   buttons that reference it by slug
//! - **Precedence**: [`resolve_button_style`] computes the effective style of
//!   one button from the theme, the global preset and a per-instance preset
//!
//! # Precedence
//!
//! Highest first:
//!
//! 1. per-instance preset assigned to the button
//! 2. global active button preset
//! 3. active theme's button shape
//! 4. framework defaults
//!
//! Buttons rendered in [`RenderContext::Admin`] only ever see tiers 3 and 4.
//!
//! ```rust
//! use kennel_theme::{button_preset_css, ButtonPreset, ButtonShape};
//!
//! let preset = ButtonPreset {
//!     border_radius: ButtonShape::Pill,
//!     ..ButtonPreset::default()
//! };
//! assert!(button_preset_css(&preset).contains("--button-border-radius: 9999px;"));
//! ```

pub mod css;
pub mod precedence;
pub mod records;
pub mod tokens;
pub mod wire;

pub use css::{
    button_preset_css, scope_preset_css, theme_css, ADMIN_BUTTON_ATTR, PRESET_SLUG_ATTR,
};
pub use precedence::{
    data_attributes, resolve_button_style, RenderContext, ResolvedButtonStyle, StyleLayers,
    StyleTier,
};
pub use records::*;
pub use tokens::{ButtonSize, ButtonTokens, ButtonVariant, CssVariables, ThemeShape};
pub use wire::{CssResponse, PresetCssResponse, PresetSummary};
