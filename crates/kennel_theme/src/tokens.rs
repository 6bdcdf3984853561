//! Button style tokens
//!
//! Tokens are the values a button reads when its inline style snapshot is
//! computed. They come either straight from a stored record or from the
//! cascaded custom properties of an injected stylesheet.

use crate::records::{ButtonPreset, ButtonShape, PresetColors, PresetSizes, SizeSpec, Theme};
use rustc_hash::FxHashMap;

/// Cascaded custom-property values keyed by name, including the `--` prefix
pub type CssVariables = FxHashMap<String, String>;

/// Button variants of the component library
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    /// Value of `data-button-variant`; only the preset-colored variants carry one
    pub fn data_attribute(self) -> Option<&'static str> {
        match self {
            Self::Default => Some("default"),
            Self::Secondary => Some("secondary"),
            _ => None,
        }
    }
}

/// Button sizes of the component library
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Default,
    Lg,
    /// Fixed square icon button, never sized by presets
    Icon,
}

/// Everything a preset contributes to a button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonTokens {
    pub colors: PresetColors,
    pub sizes: PresetSizes,
    /// Either a concrete length or `var(--radius)`
    pub border_radius: String,
}

impl ButtonTokens {
    pub fn from_preset(preset: &ButtonPreset) -> Self {
        Self {
            colors: preset.colors.clone(),
            sizes: preset.sizes.clone(),
            border_radius: preset.border_radius.css_radius().to_string(),
        }
    }

    /// Read the `--button-*` properties emitted by the preset stylesheet.
    ///
    /// Returns `None` when no preset stylesheet is in effect.
    pub fn from_variables(vars: &CssVariables) -> Option<Self> {
        let read = |name: &str| vars.get(name).cloned().unwrap_or_default();
        let primary = vars.get("--button-primary")?.clone();
        let size = |prefix: &str| SizeSpec {
            height: read(&format!("--button-{prefix}-height")),
            padding_x: read(&format!("--button-{prefix}-padding-x")),
            font_size: read(&format!("--button-{prefix}-font-size")),
        };
        let text_hover = read("--button-text-hover");

        Some(Self {
            colors: PresetColors {
                primary,
                primary_hover: read("--button-primary-hover"),
                secondary: read("--button-secondary"),
                secondary_hover: read("--button-secondary-hover"),
                text: read("--button-text"),
                text_hover: (!text_hover.is_empty()).then_some(text_hover),
            },
            sizes: PresetSizes {
                sm: size("sm"),
                default: size("default"),
                lg: size("lg"),
            },
            border_radius: read("--button-border-radius"),
        })
    }

    pub fn size(&self, size: ButtonSize) -> Option<&SizeSpec> {
        match size {
            ButtonSize::Sm => Some(&self.sizes.sm),
            ButtonSize::Default => Some(&self.sizes.default),
            ButtonSize::Lg => Some(&self.sizes.lg),
            // icon buttons keep their square framework box
            ButtonSize::Icon => None,
        }
    }
}

/// What the active theme says about buttons
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeShape {
    pub shape: ButtonShape,
    /// Theme `--radius` length
    pub radius: String,
}

impl ThemeShape {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            shape: theme.styles.button_style,
            radius: theme.styles.border_radius.clone(),
        }
    }

    /// Read `--button-style` and `--radius` from the theme stylesheet
    pub fn from_variables(vars: &CssVariables) -> Option<Self> {
        let shape = ButtonShape::parse(vars.get("--button-style")?)?;
        let radius = vars.get("--radius").cloned().unwrap_or_default();
        Some(Self { shape, radius })
    }

    /// Concrete border radius for this shape
    pub fn radius_value(&self) -> String {
        match self.shape {
            ButtonShape::Rounded => self.radius.clone(),
            other => other.css_radius().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> CssVariables {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_tokens_absent_without_preset_variables() {
        assert_eq!(ButtonTokens::from_variables(&vars(&[("--radius", "1rem")])), None);
    }

    #[test]
    fn test_tokens_read_from_variables() {
        let tokens = ButtonTokens::from_variables(&vars(&[
            ("--button-primary", "#111111"),
            ("--button-text", "#ffffff"),
            ("--button-lg-height", "3rem"),
            ("--button-border-radius", "9999px"),
        ]))
        .unwrap();
        assert_eq!(tokens.colors.primary, "#111111");
        assert_eq!(tokens.colors.text_hover, None);
        assert_eq!(tokens.size(ButtonSize::Lg).unwrap().height, "3rem");
        assert_eq!(tokens.size(ButtonSize::Icon), None);
        assert_eq!(tokens.border_radius, "9999px");
    }

    #[test]
    fn test_theme_shape_radius_value() {
        let rounded = ThemeShape {
            shape: ButtonShape::Rounded,
            radius: "0.75rem".into(),
        };
        assert_eq!(rounded.radius_value(), "0.75rem");
        let pill = ThemeShape {
            shape: ButtonShape::Pill,
            ..rounded
        };
        assert_eq!(pill.radius_value(), "9999px");
    }

    #[test]
    fn test_variant_data_attribute() {
        assert_eq!(ButtonVariant::Default.data_attribute(), Some("default"));
        assert_eq!(ButtonVariant::Secondary.data_attribute(), Some("secondary"));
        assert_eq!(ButtonVariant::Ghost.data_attribute(), None);
    }
}
