use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable holding the catalog API credential.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub tmdb: TmdbConfig,

    pub collector: CollectorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            tmdb: TmdbConfig::default(),
            collector: CollectorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:db/catalog.db".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    pub base_url: String,

    pub language: String,

    /// Request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,

    /// Normally supplied through the environment; never written back out.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            language: "en-US".to_string(),
            request_timeout_seconds: 30,
            api_key: None,
        }
    }
}

impl TmdbConfig {
    /// Config file value first, then the `TMDB_API_KEY` environment variable.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Popular pages fetched per content type, 20 items each (default: 5)
    pub pages_per_type: u32,

    /// Fixed pause between items, milliseconds (default: 250)
    pub request_delay_ms: u64,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            pages_per_type: 5,
            request_delay_ms: 250,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("trendarr").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".trendarr").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.collector.pages_per_type == 0 {
            anyhow::bail!("collector.pages_per_type must be > 0");
        }

        if self.tmdb.request_timeout_seconds == 0 {
            anyhow::bail!("tmdb.request_timeout_seconds must be > 0");
        }

        if self.tmdb.base_url.is_empty() {
            anyhow::bail!("tmdb.base_url cannot be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.collector.pages_per_type, 5);
        assert_eq!(config.collector.request_delay_ms, 250);
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb.language, "en-US");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[tmdb]"));
        assert!(toml_str.contains("[collector]"));
        // The credential never round-trips through the config file.
        assert!(!toml_str.contains("api_key"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [collector]
            pages_per_type = 2
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.collector.pages_per_type, 2);

        assert_eq!(config.tmdb.language, "en-US");
    }

    #[test]
    fn test_validate_rejects_zero_pages() {
        let mut config = Config::default();
        config.collector.pages_per_type = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_prefers_config_value() {
        let mut config = Config::default();
        config.tmdb.api_key = Some("from-config".to_string());
        assert_eq!(
            config.tmdb.resolve_api_key().as_deref(),
            Some("from-config")
        );
    }
}
