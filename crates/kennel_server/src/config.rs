//! Server configuration (kennel.toml)
//!
//! Every section is optional. Environment variables override the file:
//!
//! | variable               | setting                |
//! |------------------------|------------------------|
//! | `KENNEL_BIND`          | `server.bind`          |
//! | `KENNEL_ADMIN_TOKEN`   | `server.admin_token`   |
//! | `KENNEL_SNAPSHOT_PATH` | `store.snapshot_path`  |
//! | `KENNEL_SEED_DEFAULTS` | `store.seed_defaults`  |

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct KennelConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener and admin access
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Bearer token required by the admin API; the admin API is open when unset
    #[serde(default)]
    pub admin_token: Option<String>,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            admin_token: None,
        }
    }
}

/// Catalog persistence
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// JSON snapshot file; the catalog is memory-only when unset
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
    /// Create and apply the stock theme and preset on an empty catalog
    #[serde(default = "default_true")]
    pub seed_defaults: bool,
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            seed_defaults: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl KennelConfig {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid kennel configuration")
    }

    /// Apply `KENNEL_*` overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from any variable lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(bind) = lookup("KENNEL_BIND").filter(|v| !v.is_empty()) {
            self.server.bind = bind;
        }
        if let Some(token) = lookup("KENNEL_ADMIN_TOKEN") {
            self.server.admin_token = (!token.is_empty()).then_some(token);
        }
        if let Some(path) = lookup("KENNEL_SNAPSHOT_PATH") {
            self.store.snapshot_path = (!path.is_empty()).then(|| PathBuf::from(path));
        }
        if let Some(seed) = lookup("KENNEL_SEED_DEFAULTS").and_then(|v| parse_bool(&v)) {
            self.store.seed_defaults = seed;
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = KennelConfig::from_toml("").unwrap();
        assert_eq!(config, KennelConfig::default());
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert!(config.store.seed_defaults);
    }

    #[test]
    fn test_partial_sections() {
        let config = KennelConfig::from_toml(
            r#"
            [server]
            admin_token = "s3cret"

            [store]
            snapshot_path = "/var/lib/kennel/catalog.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.server.admin_token.as_deref(), Some("s3cret"));
        assert_eq!(
            config.store.snapshot_path,
            Some(PathBuf::from("/var/lib/kennel/catalog.json"))
        );
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("KENNEL_BIND", "0.0.0.0:9000"),
            ("KENNEL_ADMIN_TOKEN", ""),
            ("KENNEL_SEED_DEFAULTS", "no"),
        ]
        .into_iter()
        .collect();

        let mut config = KennelConfig::default();
        config.server.admin_token = Some("from-file".into());
        config.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.server.admin_token, None);
        assert!(!config.store.seed_defaults);
    }

    #[test]
    fn test_unparseable_bool_is_ignored() {
        let mut config = KennelConfig::default();
        config.apply_overrides(|name| (name == "KENNEL_SEED_DEFAULTS").then(|| "maybe".to_string()));
        assert!(config.store.seed_defaults);
    }

    #[test]
    fn test_load_from_file_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kennel.toml");
        assert_eq!(
            KennelConfig::load_or_default(&path).unwrap(),
            KennelConfig::default()
        );

        fs::write(&path, "[logging]\nfilter = \"warn\"\n").unwrap();
        let config = KennelConfig::load_or_default(&path).unwrap();
        assert_eq!(config.logging.filter, "warn");

        fs::write(&path, "[server\nbind = 1").unwrap();
        let err = KennelConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = KennelConfig::default();
        config.logging.filter = "debug,kennel_store=trace".into();
        let text = config.to_toml().unwrap();
        assert_eq!(KennelConfig::from_toml(&text).unwrap(), config);
    }
}
