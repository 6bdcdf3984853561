use kennel_theme::{
    button_preset_css, scope_preset_css, theme_css, ButtonPreset, ButtonShape, Theme, ThemeColors,
};

fn custom_properties(css: &str) -> Vec<String> {
    css.lines()
        .filter_map(|line| line.trim().strip_prefix("--"))
        .filter_map(|decl| decl.split(':').next())
        .map(|name| name.to_string())
        .collect()
}

#[test]
fn theme_sheet_has_one_property_per_palette_entry() {
    let theme = Theme::default();
    let css = theme_css(&theme).unwrap();
    let names = custom_properties(&css);

    for (entry, _) in theme.colors.entries() {
        let kebab: String = entry
            .chars()
            .flat_map(|c| {
                if c.is_ascii_uppercase() {
                    vec!['-', c.to_ascii_lowercase()]
                } else {
                    vec![c]
                }
            })
            .collect();
        let count = names.iter().filter(|n| **n == kebab).count();
        assert_eq!(count, 1, "expected exactly one --{kebab}");
    }
    assert!(names.contains(&"radius".to_string()));
    assert!(names.contains(&"button-style".to_string()));
}

#[test]
fn theme_sheet_omits_missing_status_colors() {
    let theme = Theme {
        colors: ThemeColors {
            success: None,
            warning: None,
            ..ThemeColors::default()
        },
        ..Theme::default()
    };
    let css = theme_css(&theme).unwrap();
    assert!(!css.contains("--success"));
    assert!(!css.contains("--warning"));
}

#[test]
fn theme_sheet_converts_palette_to_hsl() {
    let theme = Theme {
        colors: ThemeColors {
            primary: "#8b5cf6".into(),
            background: "#fafafa".into(),
            ..ThemeColors::default()
        },
        ..Theme::default()
    };
    let css = theme_css(&theme).unwrap();
    assert!(css.contains("--primary: 258 90% 66%;"));
    assert!(css.contains("--background: 0 0% 98%;"));
    assert!(css.contains("--primary-foreground: 0 0% 100%;"));
}

#[test]
fn white_primary_gets_black_foreground() {
    let theme = Theme {
        colors: ThemeColors {
            primary: "#ffffff".into(),
            ..ThemeColors::default()
        },
        ..Theme::default()
    };
    let css = theme_css(&theme).unwrap();
    assert!(css.contains("--primary-foreground: 0 0% 0%;"));
}

#[test]
fn empty_accent_falls_back_to_primary() {
    let theme = Theme {
        colors: ThemeColors {
            accent: String::new(),
            primary: "#667eea".into(),
            ..ThemeColors::default()
        },
        ..Theme::default()
    };
    let css = theme_css(&theme).unwrap();
    assert!(css.contains("--accent: 229 76% 66%;"));
}

#[test]
fn custom_css_comes_after_generated_rules() {
    let theme = Theme {
        custom_css: Some(".hero { color: red; }".into()),
        ..Theme::default()
    };
    let css = theme_css(&theme).unwrap();
    let custom_at = css.find(".hero").unwrap();
    assert!(css.ends_with(".hero { color: red; }"));
    assert!(css.find(":root").unwrap() < custom_at);
    assert!(css.find(".btn-pill").unwrap() < custom_at);
    assert!(css.find("h1, h2, h3").unwrap() < custom_at);
}

#[test]
fn invalid_stored_color_is_an_error() {
    let theme = Theme {
        colors: ThemeColors {
            border: "not-a-color".into(),
            ..ThemeColors::default()
        },
        ..Theme::default()
    };
    assert!(theme_css(&theme).is_err());
}

#[test]
fn every_preset_selector_excludes_admin_buttons() {
    let css = button_preset_css(&ButtonPreset::default());
    let selectors: Vec<&str> = css
        .lines()
        .filter(|line| line.contains(":hover"))
        .collect();
    assert!(!selectors.is_empty());
    for selector in selectors {
        for part in selector.trim_end_matches(" {").trim_end_matches(',').split(' ') {
            if part.starts_with("button") || part.starts_with('a') {
                assert!(
                    part.contains(":not([data-admin-button=\"true\"])"),
                    "selector part {part:?} is missing the admin exclusion"
                );
            }
        }
    }
}

#[test]
fn preset_radius_follows_shape() {
    for (shape, radius) in [
        (ButtonShape::Pill, "9999px"),
        (ButtonShape::Square, "0"),
        (ButtonShape::Rounded, "var(--radius)"),
    ] {
        let css = button_preset_css(&ButtonPreset {
            border_radius: shape,
            ..ButtonPreset::default()
        });
        assert!(css.contains(&format!("--button-border-radius: {radius};")));
    }
}

#[test]
fn preset_sheet_emits_size_properties() {
    let css = button_preset_css(&ButtonPreset::default());
    assert!(css.contains("--button-sm-height: 2.25rem;"));
    assert!(css.contains("--button-default-padding-x: 1rem;"));
    assert!(css.contains("--button-lg-font-size: 1rem;"));
}

#[test]
fn scoped_sheets_for_two_slugs_do_not_overlap() {
    let css = button_preset_css(&ButtonPreset::default());
    let a = scope_preset_css(&css, "alpha");
    let b = scope_preset_css(&css, "beta");
    assert!(!a.contains("beta"));
    assert!(!b.contains("alpha"));
    assert!(a.contains("[data-button-preset-slug=\"alpha\"]"));
}
