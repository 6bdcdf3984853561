//! Stored style records
//!
//! Field names serialize in camelCase to match the JSON documents the admin
//! editor reads and writes. Defaults mirror the values a freshly created
//! record receives.

use kennel_core::{Color, ColorError};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Document id assigned by the store
#[derive(
    Clone, Copy, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Button corner shape shared by themes and presets
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonShape {
    #[default]
    Rounded,
    Square,
    Pill,
}

impl ButtonShape {
    /// Stable id used in stylesheets and settings
    pub fn id(self) -> &'static str {
        match self {
            Self::Rounded => "rounded",
            Self::Square => "square",
            Self::Pill => "pill",
        }
    }

    /// Border-radius value as written into generated stylesheets
    pub fn css_radius(self) -> &'static str {
        match self {
            Self::Square => "0",
            Self::Pill => "9999px",
            Self::Rounded => "var(--radius)",
        }
    }

    /// Utility class emitted by the theme stylesheet
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Rounded => "btn-rounded",
            Self::Square => "btn-square",
            Self::Pill => "btn-pill",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        match id.trim() {
            "rounded" => Some(Self::Rounded),
            "square" => Some(Self::Square),
            "pill" => Some(Self::Pill),
            _ => None,
        }
    }

    pub fn all() -> &'static [ButtonShape] {
        const SHAPES: [ButtonShape; 3] = [ButtonShape::Rounded, ButtonShape::Square, ButtonShape::Pill];
        &SHAPES
    }
}

/// Navbar layout echoed into settings
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarStyle {
    #[default]
    Default,
    Centered,
    Minimal,
    Sticky,
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// 16-entry theme palette, each entry a `#rrggbb` string
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    /// Falls back to `primary` when empty
    pub accent: String,
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub muted_foreground: String,
    pub border: String,
    pub input: String,
    pub ring: String,
    pub card: String,
    pub card_foreground: String,
    pub destructive: String,
    pub destructive_foreground: String,
    pub success: Option<String>,
    pub warning: Option<String>,
}

impl ThemeColors {
    /// Named palette entries that hold a value
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = vec![
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("background", self.background.as_str()),
            ("foreground", self.foreground.as_str()),
            ("mutedForeground", self.muted_foreground.as_str()),
            ("muted", self.muted.as_str()),
            ("border", self.border.as_str()),
            ("input", self.input.as_str()),
            ("ring", self.ring.as_str()),
            ("card", self.card.as_str()),
            ("cardForeground", self.card_foreground.as_str()),
            ("destructive", self.destructive.as_str()),
            ("destructiveForeground", self.destructive_foreground.as_str()),
        ];
        if let Some(success) = &self.success {
            entries.push(("success", success.as_str()));
        }
        if let Some(warning) = &self.warning {
            entries.push(("warning", warning.as_str()));
        }
        entries
    }

    /// Check that every entry is a 6-digit hex color (an empty accent is allowed)
    pub fn validate(&self) -> Result<(), ColorError> {
        for (name, value) in self.entries() {
            if name == "accent" && value.is_empty() {
                continue;
            }
            Color::parse_hex(value)?;
        }
        Ok(())
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#667eea".into(),
            secondary: "#764ba2".into(),
            accent: "#818cf8".into(),
            background: "#ffffff".into(),
            foreground: "#1f2937".into(),
            muted: "#f3f4f6".into(),
            muted_foreground: "#6b7280".into(),
            border: "#e5e7eb".into(),
            input: "#e5e7eb".into(),
            ring: "#667eea".into(),
            card: "#ffffff".into(),
            card_foreground: "#1f2937".into(),
            destructive: "#ef4444".into(),
            destructive_foreground: "#ffffff".into(),
            success: Some("#10b981".into()),
            warning: Some("#f59e0b".into()),
        }
    }
}

/// Named font sizes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub base: String,
    pub sm: String,
    pub lg: String,
    pub xl: String,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            base: "16px".into(),
            sm: "14px".into(),
            lg: "18px".into(),
            xl: "20px".into(),
        }
    }
}

/// Theme typography block
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    pub font_family: String,
    /// Falls back to `font_family` for headings when unset
    pub heading_font: Option<String>,
    pub font_size: FontSizes,
}

impl Typography {
    pub fn heading_family(&self) -> &str {
        self.heading_font
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(&self.font_family)
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Inter, sans-serif".into(),
            heading_font: Some("Inter, sans-serif".into()),
            font_size: FontSizes::default(),
        }
    }
}

/// Theme component styles
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeStyles {
    /// CSS length used for `--radius`
    pub border_radius: String,
    pub button_style: ButtonShape,
    pub navbar_style: NavbarStyle,
}

impl Default for ThemeStyles {
    fn default() -> Self {
        Self {
            border_radius: "0.5rem".into(),
            button_style: ButtonShape::Rounded,
            navbar_style: NavbarStyle::Default,
        }
    }
}

/// Site-wide color, typography and shape bundle
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub colors: ThemeColors,
    #[serde(default)]
    pub typography: Typography,
    #[serde(default)]
    pub styles: ThemeStyles,
    /// Raw stylesheet appended after the generated rules
    #[serde(default, rename = "customCSS")]
    pub custom_css: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_default: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            id: RecordId::default(),
            name: "Default".into(),
            slug: "default".into(),
            description: String::new(),
            colors: ThemeColors::default(),
            typography: Typography::default(),
            styles: ThemeStyles::default(),
            custom_css: None,
            is_active: true,
            is_default: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Button presets
// ─────────────────────────────────────────────────────────────────────────────

/// Preset button colors, stored as raw hex and emitted verbatim
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresetColors {
    pub primary: String,
    pub primary_hover: String,
    pub secondary: String,
    pub secondary_hover: String,
    pub text: String,
    /// Falls back to `text` when unset
    pub text_hover: Option<String>,
}

impl PresetColors {
    pub fn text_hover_or_text(&self) -> &str {
        self.text_hover
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.text)
    }

    pub fn validate(&self) -> Result<(), ColorError> {
        for value in [
            &self.primary,
            &self.primary_hover,
            &self.secondary,
            &self.secondary_hover,
            &self.text,
        ] {
            Color::parse_hex(value)?;
        }
        match self.text_hover.as_deref() {
            Some(hover) if !hover.is_empty() => Color::parse_hex(hover).map(|_| ()),
            _ => Ok(()),
        }
    }
}

impl Default for PresetColors {
    fn default() -> Self {
        Self {
            primary: "#667eea".into(),
            primary_hover: "#5a67d8".into(),
            secondary: "#764ba2".into(),
            secondary_hover: "#6b3d8f".into(),
            text: "#ffffff".into(),
            text_hover: Some("#ffffff".into()),
        }
    }
}

/// Dimensions of one button size, each a CSS length
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeSpec {
    pub height: String,
    pub padding_x: String,
    pub font_size: String,
}

impl SizeSpec {
    pub fn new(height: &str, padding_x: &str, font_size: &str) -> Self {
        Self {
            height: height.into(),
            padding_x: padding_x.into(),
            font_size: font_size.into(),
        }
    }
}

/// The three named preset sizes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetSizes {
    pub sm: SizeSpec,
    pub default: SizeSpec,
    pub lg: SizeSpec,
}

impl Default for PresetSizes {
    fn default() -> Self {
        Self {
            sm: SizeSpec::new("2.25rem", "0.75rem", "0.875rem"),
            default: SizeSpec::new("2.5rem", "1rem", "0.875rem"),
            lg: SizeSpec::new("2.75rem", "2rem", "1rem"),
        }
    }
}

/// Button-specific color, size and shape bundle
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonPreset {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub colors: PresetColors,
    #[serde(default)]
    pub sizes: PresetSizes,
    #[serde(default)]
    pub border_radius: ButtonShape,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_default: bool,
}

impl Default for ButtonPreset {
    fn default() -> Self {
        Self {
            id: RecordId::default(),
            name: "Classic".into(),
            slug: "classic".into(),
            description: String::new(),
            colors: PresetColors::default(),
            sizes: PresetSizes::default(),
            border_radius: ButtonShape::Rounded,
            is_active: true,
            is_default: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Site settings singleton
///
/// `active_theme` and `active_button_preset` name the records currently in
/// effect. The remaining style fields echo the active records so readers do
/// not need a second lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub site_name: String,
    #[serde(rename = "theme")]
    pub active_theme: Option<String>,
    pub active_button_preset: Option<String>,
    pub button_style: ButtonShape,
    pub navbar_style: NavbarStyle,
    pub primary_color: String,
    pub secondary_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_name: "Kennel Site".into(),
            active_theme: None,
            active_button_preset: None,
            button_style: ButtonShape::Rounded,
            navbar_style: NavbarStyle::Default,
            primary_color: "#667eea".into(),
            secondary_color: "#764ba2".into(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_is_valid() {
        assert!(ThemeColors::default().validate().is_ok());
        assert!(PresetColors::default().validate().is_ok());
        assert_eq!(ThemeColors::default().entries().len(), 16);
    }

    #[test]
    fn test_invalid_palette_entry_is_reported() {
        let colors = ThemeColors {
            ring: "#12".into(),
            ..ThemeColors::default()
        };
        assert_eq!(
            colors.validate(),
            Err(ColorError::InvalidColor("#12".into()))
        );
    }

    #[test]
    fn test_empty_accent_is_allowed() {
        let colors = ThemeColors {
            accent: String::new(),
            ..ThemeColors::default()
        };
        assert!(colors.validate().is_ok());
    }

    #[test]
    fn test_shape_parse_round_trips_ids() {
        for shape in ButtonShape::all() {
            assert_eq!(ButtonShape::parse(shape.id()), Some(*shape));
        }
        assert_eq!(ButtonShape::parse("oval"), None);
    }

    #[test]
    fn test_heading_family_falls_back_to_body() {
        let typography = Typography {
            heading_font: None,
            ..Typography::default()
        };
        assert_eq!(typography.heading_family(), "Inter, sans-serif");
    }
}
