//! Configuration management for fleetkeeper.
//!
//! Configuration is loaded with figment from TOML and environment variables,
//! falling back to defaults. The main concern is where the fleet snapshot
//! lives; the well-known default is under the platform data directory.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "fleetkeeper";

/// Default snapshot file name.
const SNAPSHOT_FILE_NAME: &str = "fleet.snap";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLEETKEEPER_`)
/// 2. TOML config file at `~/.config/fleetkeeper/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the snapshot file.
    /// Defaults to `~/.local/share/fleetkeeper/fleet.snap`.
    pub snapshot_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("FLEETKEEPER_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.storage.snapshot_path {
            if path.file_name().is_none() {
                return Err(Error::ConfigValidation {
                    message: format!(
                        "snapshot_path '{}' has no file name",
                        path.display()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Get the snapshot path, resolving the well-known default if not set.
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.storage
            .snapshot_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(SNAPSHOT_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.storage.snapshot_path.is_none());
    }

    #[test]
    fn test_validate_default_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bare_root() {
        let mut config = Config::default();
        config.storage.snapshot_path = Some(PathBuf::from("/"));

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("no file name"));
    }

    #[test]
    fn test_snapshot_path_default() {
        let config = Config::default();
        let path = config.snapshot_path();
        assert!(path.to_string_lossy().contains("fleet.snap"));
        assert!(path.to_string_lossy().contains("fleetkeeper"));
    }

    #[test]
    fn test_snapshot_path_custom() {
        let mut config = Config::default();
        config.storage.snapshot_path = Some(PathBuf::from("/custom/path/fleet.snap"));
        assert_eq!(
            config.snapshot_path(),
            PathBuf::from("/custom/path/fleet.snap")
        );
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("fleetkeeper"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_default_data_dir() {
        let path = Config::default_data_dir();
        assert!(path.to_string_lossy().contains("fleetkeeper"));
    }

    #[test]
    fn test_load_nonexistent_config_uses_defaults() {
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = std::env::temp_dir();
        let config_file = temp_dir.join(format!("fleetkeeper_config_{}.toml", std::process::id()));
        std::fs::write(
            &config_file,
            "[storage]\nsnapshot_path = \"/tmp/custom.snap\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(config_file.clone())).unwrap();
        assert_eq!(
            config.storage.snapshot_path,
            Some(PathBuf::from("/tmp/custom.snap"))
        );

        let _ = std::fs::remove_file(&config_file);
    }

    #[test]
    fn test_storage_config_serialize() {
        let storage = StorageConfig::default();
        let json = serde_json::to_string(&storage).unwrap();
        assert!(json.contains("snapshot_path"));
    }

    #[test]
    fn test_storage_config_deserialize() {
        let json = r#"{"snapshot_path": "/data/fleet.snap"}"#;
        let storage: StorageConfig = serde_json::from_str(json).unwrap();
        assert_eq!(storage.snapshot_path, Some(PathBuf::from("/data/fleet.snap")));
    }

    #[test]
    fn test_config_clone_and_eq() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
