//! Stylesheet generation
//!
//! Theme and preset records become plain CSS text: a `:root` block of custom
//! properties followed by a few rules. The text is what the public style
//! endpoints serve and what the injection channel installs.

use crate::records::{ButtonPreset, Theme};
use kennel_core::{hex_to_hsl, ColorError};
use std::fmt::{Display, Write};

/// Attribute marking buttons rendered by the admin surface
pub const ADMIN_BUTTON_ATTR: &str = "data-admin-button";

/// Attribute carrying a button's per-instance preset slug
pub const PRESET_SLUG_ATTR: &str = "data-button-preset-slug";

const ADMIN_EXCLUSION: &str = ":not([data-admin-button=\"true\"])";
const VARIANT_DEFAULT: &str = "[data-button-variant=\"default\"]";
const VARIANT_SECONDARY: &str = "[data-button-variant=\"secondary\"]";
const GENERIC_PRESET: &str = "[data-button-preset]";

/// Exact stored value that flips a foreground pair to black
const WHITE_HEX: &str = "#ffffff";
const BLACK_HEX: &str = "#000000";

fn foreground_for(background: &str) -> &'static str {
    if background == WHITE_HEX {
        BLACK_HEX
    } else {
        WHITE_HEX
    }
}

/// Generate the stylesheet for a theme.
///
/// Fails only if a stored palette entry is not a hex color; records are
/// validated on save, so callers treat an error as "no theme".
pub fn theme_css(theme: &Theme) -> Result<String, ColorError> {
    let colors = &theme.colors;
    let accent = if colors.accent.is_empty() {
        &colors.primary
    } else {
        &colors.accent
    };

    let mut vars: Vec<(&str, String)> = vec![
        ("primary", hex_to_hsl(&colors.primary)?),
        ("primary-foreground", hex_to_hsl(foreground_for(&colors.primary))?),
        ("secondary", hex_to_hsl(&colors.secondary)?),
        ("secondary-foreground", hex_to_hsl(foreground_for(&colors.secondary))?),
        ("accent", hex_to_hsl(accent)?),
        ("background", hex_to_hsl(&colors.background)?),
        ("foreground", hex_to_hsl(&colors.foreground)?),
        ("muted", hex_to_hsl(&colors.muted)?),
        ("muted-foreground", hex_to_hsl(&colors.muted_foreground)?),
        ("border", hex_to_hsl(&colors.border)?),
        ("input", hex_to_hsl(&colors.input)?),
        ("ring", hex_to_hsl(&colors.ring)?),
        ("card", hex_to_hsl(&colors.card)?),
        ("card-foreground", hex_to_hsl(&colors.card_foreground)?),
        ("destructive", hex_to_hsl(&colors.destructive)?),
        ("destructive-foreground", hex_to_hsl(&colors.destructive_foreground)?),
        ("radius", theme.styles.border_radius.clone()),
        ("button-style", theme.styles.button_style.id().to_string()),
    ];
    if let Some(success) = &colors.success {
        vars.push(("success", hex_to_hsl(success)?));
    }
    if let Some(warning) = &colors.warning {
        vars.push(("warning", hex_to_hsl(warning)?));
    }

    let mut css = String::with_capacity(1024);
    write_root(&mut css, &vars);

    css.push_str("\n/* Button style classes */\n");
    css.push_str(".btn-rounded {\n  border-radius: var(--radius);\n}\n");
    css.push_str(".btn-square {\n  border-radius: 0;\n}\n");
    css.push_str(".btn-pill {\n  border-radius: 9999px;\n}\n");

    let _ = write!(
        css,
        "\nbody {{\n  font-family: {};\n}}\n\nh1, h2, h3, h4, h5, h6 {{\n  font-family: {};\n}}\n",
        theme.typography.font_family,
        theme.typography.heading_family()
    );

    if let Some(custom) = theme.custom_css.as_deref().filter(|c| !c.trim().is_empty()) {
        css.push('\n');
        css.push_str(custom);
    }

    tracing::trace!(slug = %theme.slug, bytes = css.len(), "generated theme stylesheet");
    Ok(css.trim().to_string())
}

/// Generate the stylesheet for a button preset.
///
/// Every rule outside `:root` excludes admin-marked buttons, so the sheet can
/// be installed globally without restyling admin controls.
pub fn button_preset_css(preset: &ButtonPreset) -> String {
    let colors = &preset.colors;
    let sizes = &preset.sizes;

    let mut vars: Vec<(String, String)> = vec![
        ("button-primary".into(), colors.primary.clone()),
        ("button-primary-hover".into(), colors.primary_hover.clone()),
        ("button-secondary".into(), colors.secondary.clone()),
        ("button-secondary-hover".into(), colors.secondary_hover.clone()),
        ("button-text".into(), colors.text.clone()),
        ("button-text-hover".into(), colors.text_hover_or_text().to_string()),
        ("button-border-radius".into(), preset.border_radius.css_radius().to_string()),
    ];
    for (size, spec) in [("sm", &sizes.sm), ("default", &sizes.default), ("lg", &sizes.lg)] {
        vars.push((format!("button-{size}-height"), spec.height.clone()));
        vars.push((format!("button-{size}-padding-x"), spec.padding_x.clone()));
        vars.push((format!("button-{size}-font-size"), spec.font_size.clone()));
    }

    let mut css = String::with_capacity(1024);
    write_root(&mut css, &vars);
    css.push_str("\n/* Button hover styles; admin buttons are excluded */\n");
    write_hover_rule(&mut css, VARIANT_DEFAULT, "--button-primary-hover");
    css.push('\n');
    write_hover_rule(&mut css, VARIANT_SECONDARY, "--button-secondary-hover");

    tracing::trace!(slug = %preset.slug, bytes = css.len(), "generated button preset stylesheet");
    css.trim().to_string()
}

/// Retarget a preset stylesheet to buttons carrying `data-button-preset-slug`.
///
/// The `:root` block and the variant selectors are qualified with the slug
/// attribute, so two instance presets on one page never collide and the
/// instance variables never reach buttons without the attribute. Other
/// selectors are left as they are.
pub fn scope_preset_css(css: &str, slug: &str) -> String {
    let scope = format!("[{PRESET_SLUG_ATTR}=\"{}\"]", escape_attr(slug));
    css.replace(":root", &scope)
        .replace(GENERIC_PRESET, &scope)
        .replace(VARIANT_DEFAULT, &format!("{scope}{VARIANT_DEFAULT}"))
        .replace(VARIANT_SECONDARY, &format!("{scope}{VARIANT_SECONDARY}"))
}

fn write_root<N: Display>(css: &mut String, vars: &[(N, String)]) {
    css.push_str(":root {\n");
    for (name, value) in vars {
        let _ = writeln!(css, "  --{name}: {value};");
    }
    css.push_str("}\n");
}

fn write_hover_rule(css: &mut String, variant: &str, hover_var: &str) {
    let _ = write!(
        css,
        "button{ADMIN_EXCLUSION}{variant}:hover,\n\
         a{ADMIN_EXCLUSION} button{ADMIN_EXCLUSION}{variant}:hover {{\n  \
         background-color: var({hover_var}) !important;\n  \
         color: var(--button-text-hover) !important;\n}}\n"
    );
}

fn escape_attr(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
