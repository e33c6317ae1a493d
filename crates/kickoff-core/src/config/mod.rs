//! Configuration module for kickoff.
//!
//! Loads typed configuration from `~/.kickoff/config.json`, then applies
//! environment overrides (`API_FOOTBALL_KEY`). All fields use `serde`
//! defaults so a missing file or section is never an error.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable holding the API-Football credential.
pub const API_KEY_ENV: &str = "API_FOOTBALL_KEY";

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub football: FootballConfig,
}

impl Config {
    /// Load configuration from the default path (`~/.kickoff/config.json`)
    /// and apply environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::default_path();
        let mut config = if path.exists() {
            Self::read_file(&path)?
        } else {
            Config::default()
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific path and apply environment overrides.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn read_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Replace file values with non-empty environment values.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a closure.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.is_empty()) {
            self.football.api_key = key;
        }
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Get the default config directory path.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".kickoff")
    }

    /// Write the default config template to `path`.
    pub fn write_default_template(path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = serde_json::json!({
            "football": {
                "apiKey": "YOUR_API_FOOTBALL_KEY",
                "baseUrl": DEFAULT_BASE_URL,
                "timeoutSeconds": DEFAULT_TIMEOUT_SECONDS
            }
        });

        std::fs::write(path, serde_json::to_string_pretty(&template)?)?;
        Ok(())
    }
}

// ── Football API Configuration ──────────────────────────────────────

pub const DEFAULT_BASE_URL: &str = "https://v3.football.api-sports.io";
pub const DEFAULT_API_HOST: &str = "v3.football.api-sports.io";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

/// Settings for the API-Football provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FootballConfig {
    /// Sent as `x-rapidapi-key`. Empty is allowed; the provider rejects it.
    pub api_key: String,
    pub base_url: String,
    /// Sent as `x-rapidapi-host`.
    pub api_host: String,
    pub timeout_seconds: u64,
}

impl Default for FootballConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.into(),
            api_host: DEFAULT_API_HOST.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl FootballConfig {
    /// Whether a credential is present.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
