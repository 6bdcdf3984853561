//! Where a browsing context fetches style blobs from

use async_trait::async_trait;
use kennel_theme::{CssResponse, PresetCssResponse, PresetSummary};
use reqwest::StatusCode;
use thiserror::Error;

/// A style blob could not be retrieved
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("style request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("style endpoint returned {0}")]
    Status(StatusCode),

    #[error("style source unavailable: {0}")]
    Unavailable(String),
}

/// Stylesheet and public view of one preset
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstancePreset {
    pub css: String,
    pub preset: PresetSummary,
}

/// Read side of the public style endpoints.
///
/// `Ok(None)` means "nothing to apply", not a failure.
#[async_trait]
pub trait StyleSource: Send + Sync {
    async fn active_theme_css(&self) -> Result<Option<String>, FetchError>;

    async fn active_button_preset_css(&self) -> Result<Option<String>, FetchError>;

    async fn button_preset(&self, slug: &str) -> Result<Option<InstancePreset>, FetchError>;
}

/// [`StyleSource`] backed by the HTTP style endpoints
#[derive(Clone, Debug)]
pub struct HttpStyleSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStyleSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// By-slug endpoint with the slug as one percent-encoded path segment
    fn preset_url(&self, slug: &str) -> Result<reqwest::Url, FetchError> {
        let mut url = reqwest::Url::parse(&format!("{}/api/button-presets/by-slug", self.base_url))
            .map_err(|err| FetchError::Unavailable(format!("invalid base url: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::Unavailable(format!("invalid base url: {}", self.base_url)))?
            .push(slug);
        Ok(url)
    }

    async fn get_css(&self, path: &str) -> Result<Option<String>, FetchError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        let body: CssResponse = response.json().await?;
        Ok(body.css.filter(|css| !css.is_empty()))
    }
}

#[async_trait]
impl StyleSource for HttpStyleSource {
    async fn active_theme_css(&self) -> Result<Option<String>, FetchError> {
        self.get_css("/api/themes/active-css").await
    }

    async fn active_button_preset_css(&self) -> Result<Option<String>, FetchError> {
        self.get_css("/api/button-presets/active-css").await
    }

    async fn button_preset(&self, slug: &str) -> Result<Option<InstancePreset>, FetchError> {
        let url = self.preset_url(slug)?;
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        let body: PresetCssResponse = response.json().await?;
        Ok(match (body.css, body.preset) {
            (Some(css), Some(preset)) => Some(InstancePreset { css, preset }),
            _ => None,
        })
    }
}
