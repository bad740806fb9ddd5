use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// # base_url = "https://api.stormglass.io/v2"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API key sent verbatim as the `Authorization` header value.
    pub api_key: Option<String>,

    /// Base URL override; the production endpoint is used when unset.
    pub base_url: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "stormglass", "stormglass")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set or replace the stored API key.
    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_api_key() {
        let cfg = Config::default();

        assert!(!cfg.has_api_key());
        assert_eq!(cfg.base_url, None);
    }

    #[test]
    fn set_api_key_replaces_value() {
        let mut cfg = Config::default();

        cfg.set_api_key("KEY".into());
        assert!(cfg.has_api_key());
        assert_eq!(cfg.api_key.as_deref(), Some("KEY"));

        cfg.set_api_key("OTHER".into());
        assert_eq!(cfg.api_key.as_deref(), Some("OTHER"));
    }

    #[test]
    fn config_toml_round_trip() {
        let cfg = Config {
            api_key: Some("testkey123".to_string()),
            base_url: Some("http://localhost:8080".to_string()),
        };

        let text = toml::to_string_pretty(&cfg).expect("config should serialize");
        let parsed: Config = toml::from_str(&text).expect("config should parse back");

        assert_eq!(parsed.api_key.as_deref(), Some("testkey123"));
        assert_eq!(parsed.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let parsed: Config = toml::from_str("").expect("empty config should parse");

        assert_eq!(parsed.api_key, None);
        assert_eq!(parsed.base_url, None);
    }
}
