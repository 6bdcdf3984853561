//! Button style precedence
//!
//! A button's effective style is resolved from up to three style sources.
//! Highest tier wins as a whole; tiers are never mixed property by property:
//!
//! - [`StyleTier::Instance`]: a preset assigned to this one button
//! - [`StyleTier::GlobalPreset`]: the site's active button preset
//! - [`StyleTier::ThemeShape`]: the active theme's button shape
//! - [`StyleTier::Framework`]: component library defaults
//!
//! Admin-surface buttons skip the two preset tiers unconditionally.

use crate::css::{ADMIN_BUTTON_ATTR, PRESET_SLUG_ATTR};
use crate::tokens::{ButtonSize, ButtonTokens, ButtonVariant, ThemeShape};
use std::fmt::Write;

/// Radius used for `rounded` when no theme supplies `--radius`
pub const FALLBACK_RADIUS: &str = "0.5rem";

/// Surface a component is rendered into
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum RenderContext {
    /// Admin chrome; never skinned by site-facing presets
    Admin,
    #[default]
    Public,
}

/// Which style source produced a resolved style
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum StyleTier {
    Instance,
    GlobalPreset,
    ThemeShape,
    Framework,
}

/// Style sources currently in effect for one button
#[derive(Clone, Copy, Debug, Default)]
pub struct StyleLayers<'a> {
    pub theme: Option<&'a ThemeShape>,
    pub global: Option<&'a ButtonTokens>,
    pub instance: Option<&'a ButtonTokens>,
}

/// Point-in-time style values applied to one button.
///
/// `None` means the framework default for that property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedButtonStyle {
    pub tier: StyleTier,
    pub border_radius: Option<String>,
    pub height: Option<String>,
    pub padding_x: Option<String>,
    pub font_size: Option<String>,
    pub background: Option<String>,
    pub color: Option<String>,
    pub hover_background: Option<String>,
    pub hover_color: Option<String>,
    /// Theme utility class (`btn-rounded`, ...) for the shape tier
    pub class_name: Option<&'static str>,
}

impl ResolvedButtonStyle {
    pub fn framework() -> Self {
        Self {
            tier: StyleTier::Framework,
            border_radius: None,
            height: None,
            padding_x: None,
            font_size: None,
            background: None,
            color: None,
            hover_background: None,
            hover_color: None,
            class_name: None,
        }
    }

    /// Render the resting-state properties as an inline `style` attribute
    pub fn inline_css(&self) -> String {
        let mut out = String::new();
        let mut push = |name: &str, value: &Option<String>| {
            if let Some(value) = value {
                let _ = write!(out, "{name}: {value}; ");
            }
        };
        push("border-radius", &self.border_radius);
        push("height", &self.height);
        push("padding-left", &self.padding_x);
        push("padding-right", &self.padding_x);
        push("font-size", &self.font_size);
        push("background-color", &self.background);
        push("color", &self.color);
        out.trim_end().to_string()
    }
}

impl Default for ResolvedButtonStyle {
    fn default() -> Self {
        Self::framework()
    }
}

/// Resolve the effective style of one button
pub fn resolve_button_style(
    context: RenderContext,
    variant: ButtonVariant,
    size: ButtonSize,
    layers: StyleLayers<'_>,
) -> ResolvedButtonStyle {
    if context == RenderContext::Public {
        if let Some(tokens) = layers.instance {
            return from_tokens(StyleTier::Instance, tokens, variant, size, layers.theme);
        }
        if let Some(tokens) = layers.global {
            return from_tokens(StyleTier::GlobalPreset, tokens, variant, size, layers.theme);
        }
    }

    match layers.theme {
        Some(theme) => ResolvedButtonStyle {
            tier: StyleTier::ThemeShape,
            border_radius: non_empty(theme.radius_value()),
            class_name: Some(theme.shape.class_name()),
            ..ResolvedButtonStyle::framework()
        },
        None => ResolvedButtonStyle::framework(),
    }
}

/// Data attributes a button element carries for the generated stylesheets
pub fn data_attributes(
    context: RenderContext,
    variant: ButtonVariant,
    preset_slug: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut attrs = Vec::with_capacity(3);
    if let Some(value) = variant.data_attribute() {
        attrs.push(("data-button-variant", value.to_string()));
    }
    match context {
        RenderContext::Admin => attrs.push((ADMIN_BUTTON_ATTR, "true".to_string())),
        RenderContext::Public => {
            if let Some(slug) = preset_slug {
                attrs.push((PRESET_SLUG_ATTR, slug.to_string()));
            }
        }
    }
    attrs
}

fn from_tokens(
    tier: StyleTier,
    tokens: &ButtonTokens,
    variant: ButtonVariant,
    size: ButtonSize,
    theme: Option<&ThemeShape>,
) -> ResolvedButtonStyle {
    let size = tokens.size(size);
    let (background, hover_background) = match variant {
        ButtonVariant::Default => (
            Some(&tokens.colors.primary),
            Some(&tokens.colors.primary_hover),
        ),
        ButtonVariant::Secondary => (
            Some(&tokens.colors.secondary),
            Some(&tokens.colors.secondary_hover),
        ),
        _ => (None, None),
    };
    let colored = background.is_some();

    ResolvedButtonStyle {
        tier,
        border_radius: non_empty(resolve_radius(&tokens.border_radius, theme)),
        height: size.and_then(|s| non_empty(s.height.clone())),
        padding_x: size.and_then(|s| non_empty(s.padding_x.clone())),
        font_size: size.and_then(|s| non_empty(s.font_size.clone())),
        background: background.and_then(|c| non_empty(c.clone())),
        color: colored
            .then(|| non_empty(tokens.colors.text.clone()))
            .flatten(),
        hover_background: hover_background.and_then(|c| non_empty(c.clone())),
        hover_color: colored
            .then(|| non_empty(tokens.colors.text_hover_or_text().to_string()))
            .flatten(),
        class_name: None,
    }
}

/// Substitute the theme radius for `var(--radius)`.
///
/// A rounded preset follows the active theme's `--radius`, the same value the
/// `.btn-rounded` class uses; the fixed `0.5rem` applies only without a theme.
fn resolve_radius(value: &str, theme: Option<&ThemeShape>) -> String {
    if value.trim() == "var(--radius)" {
        theme
            .map(|t| t.radius.clone())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| FALLBACK_RADIUS.to_string())
    } else {
        value.to_string()
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}
