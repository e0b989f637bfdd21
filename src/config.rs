//! Configuration handling for the form builder

use crate::state::HISTORY_LIMIT;
use crate::storage::FileStorage;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the storage file location
pub const STORAGE_ENV_VAR: &str = "FORM_BUILDER_STORAGE";

const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

/// User configuration for the form builder
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuilderConfig {
    /// Where the forms, responses and templates are stored
    pub storage_path: Option<PathBuf>,
    /// Origin used when building share links
    pub share_base_url: Option<String>,
    /// Simulated latency before a submission is recorded
    pub submit_delay_ms: Option<u64>,
    /// Undo snapshots kept per editing session
    pub history_limit: Option<usize>,
}

impl BuilderConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formbuilder", "form-builder")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir, or defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: BuilderConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Storage file to open: env override, then config, then the data dir
    pub fn resolved_storage_path(&self) -> Option<PathBuf> {
        self.storage_path_with(std::env::var_os(STORAGE_ENV_VAR).map(PathBuf::from))
    }

    fn storage_path_with(&self, env_override: Option<PathBuf>) -> Option<PathBuf> {
        env_override
            .or_else(|| self.storage_path.clone())
            .or_else(FileStorage::default_path)
    }

    pub fn share_base_url(&self) -> &str {
        self.share_base_url
            .as_deref()
            .unwrap_or(DEFAULT_SHARE_BASE_URL)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit.unwrap_or(HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert!(config.storage_path.is_none());
        assert!(config.share_base_url.is_none());
        assert!(config.submit_delay_ms.is_none());
        assert!(config.history_limit.is_none());
    }

    #[test]
    fn test_defaults_resolve() {
        let config = BuilderConfig::default();
        assert_eq!(config.share_base_url(), DEFAULT_SHARE_BASE_URL);
        assert_eq!(config.submit_delay(), Duration::from_secs(1));
        assert_eq!(config.history_limit(), HISTORY_LIMIT);
    }

    #[test]
    fn test_serialization() {
        let config = BuilderConfig {
            storage_path: Some(PathBuf::from("/tmp/forms.json")),
            share_base_url: Some("https://forms.example.com".to_string()),
            submit_delay_ms: Some(0),
            history_limit: Some(10),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: BuilderConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.storage_path, Some(PathBuf::from("/tmp/forms.json")));
        assert_eq!(parsed.share_base_url(), "https://forms.example.com");
        assert_eq!(parsed.submit_delay(), Duration::ZERO);
        assert_eq!(parsed.history_limit(), 10);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: BuilderConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.storage_path.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"history_limit": 5, "unknown_field": "value"}"#;
        let parsed: BuilderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.history_limit, Some(5));
    }

    #[test]
    fn test_config_path_is_config_json() {
        if let Some(path) = BuilderConfig::config_path() {
            assert!(path.ends_with("config.json"));
            assert!(path.to_string_lossy().contains("form-builder"));
        }
    }

    #[test]
    fn test_save_then_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = BuilderConfig {
            share_base_url: Some("https://forms.example.com".to_string()),
            history_limit: Some(7),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = BuilderConfig::load_from(&path).unwrap();

        assert_eq!(loaded.share_base_url(), "https://forms.example.com");
        assert_eq!(loaded.history_limit(), 7);
        assert!(loaded.storage_path.is_none());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = BuilderConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.history_limit.is_none());
    }

    #[test]
    fn test_configured_storage_path_used_without_env_override() {
        let config = BuilderConfig {
            storage_path: Some(PathBuf::from("/data/forms.json")),
            ..Default::default()
        };
        assert_eq!(
            config.storage_path_with(None),
            Some(PathBuf::from("/data/forms.json"))
        );
    }

    #[test]
    fn test_env_override_wins_over_config() {
        let config = BuilderConfig {
            storage_path: Some(PathBuf::from("/data/forms.json")),
            ..Default::default()
        };
        assert_eq!(
            config.storage_path_with(Some(PathBuf::from("/tmp/override.json"))),
            Some(PathBuf::from("/tmp/override.json"))
        );
    }

    #[test]
    fn test_unconfigured_storage_falls_back_to_data_dir() {
        let config = BuilderConfig::default();
        assert_eq!(config.storage_path_with(None), FileStorage::default_path());
    }
}
