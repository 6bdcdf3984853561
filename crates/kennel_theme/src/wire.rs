//! JSON bodies of the public style endpoints

use crate::records::{ButtonPreset, ButtonShape, PresetColors, PresetSizes};
use crate::tokens::ButtonTokens;
use serde::{Deserialize, Serialize};

/// Body of the active-css endpoints; `css` is null when nothing applies
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssResponse {
    pub css: Option<String>,
}

impl CssResponse {
    pub fn none() -> Self {
        Self { css: None }
    }

    pub fn some(css: impl Into<String>) -> Self {
        Self {
            css: Some(css.into()),
        }
    }
}

/// Public view of a preset returned alongside its stylesheet
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetSummary {
    pub name: String,
    pub slug: String,
    pub colors: PresetColors,
    pub sizes: PresetSizes,
    pub border_radius: ButtonShape,
}

impl From<&ButtonPreset> for PresetSummary {
    fn from(preset: &ButtonPreset) -> Self {
        Self {
            name: preset.name.clone(),
            slug: preset.slug.clone(),
            colors: preset.colors.clone(),
            sizes: preset.sizes.clone(),
            border_radius: preset.border_radius,
        }
    }
}

impl PresetSummary {
    pub fn tokens(&self) -> ButtonTokens {
        ButtonTokens {
            colors: self.colors.clone(),
            sizes: self.sizes.clone(),
            border_radius: self.border_radius.css_radius().to_string(),
        }
    }
}

/// Body of the by-slug preset endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetCssResponse {
    pub css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<PresetSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PresetCssResponse {
    pub fn found(css: String, preset: &ButtonPreset) -> Self {
        Self {
            css: Some(css),
            preset: Some(preset.into()),
            error: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            css: None,
            preset: None,
            error: Some("Preset not found".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_response_null() {
        let json = serde_json::to_string(&CssResponse::none()).unwrap();
        assert_eq!(json, r#"{"css":null}"#);
    }

    #[test]
    fn test_not_found_body() {
        let json = serde_json::to_value(PresetCssResponse::not_found()).unwrap();
        assert_eq!(json["css"], serde_json::Value::Null);
        assert_eq!(json["error"], "Preset not found");
        assert!(json.get("preset").is_none());
    }

    #[test]
    fn test_summary_camel_case() {
        let preset = ButtonPreset {
            border_radius: ButtonShape::Pill,
            ..ButtonPreset::default()
        };
        let json = serde_json::to_value(PresetSummary::from(&preset)).unwrap();
        assert_eq!(json["borderRadius"], "pill");
        assert_eq!(json["slug"], "classic");
        assert_eq!(
            PresetSummary::from(&preset).tokens(),
            ButtonTokens::from_preset(&preset)
        );
    }
}
