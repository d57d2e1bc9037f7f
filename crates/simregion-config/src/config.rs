//! Tool configuration with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use simregion_settings::RotationFallback;

use crate::error::ConfigError;

const APP_NAME: &str = "simregion";
const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration for the region tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToolConfig {
    /// Where region settings files live.
    pub storage: StorageConfig,
    /// Telehub behavior.
    pub telehub: TelehubConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Region settings storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one `<region-uuid>.ron` per region. `None` uses the
    /// platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Pretty-print region files.
    pub pretty: bool,
}

/// Telehub behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TelehubConfig {
    /// Rotation reported for regions without a telehub.
    pub rotation_fallback: RotationFallback,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory for JSON log files. Unset disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            pretty: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl StorageConfig {
    /// Configured data directory, or `<data dir>/simregion/regions`.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|base| base.join(APP_NAME).join("regions"))
            .ok_or(ConfigError::NoDataDir)
    }
}

// --- Load / Save / Reload ---

impl ToolConfig {
    /// Platform config directory for the tools, e.g. `~/.config/simregion`.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join(APP_NAME))
    }

    /// `config.ron` inside `config_dir`.
    pub fn file_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    /// Load config from the given directory, or create a default config file.
    ///
    /// Runs before logging is set up, so callers report the outcome.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = Self::file_path(config_dir);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            ron::from_str(&contents).map_err(ConfigError::ParseError)
        } else {
            let config = ToolConfig::default();
            config.save(config_dir)?;
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(Self::file_path(config_dir), serialized).map_err(ConfigError::WriteError)
    }

    /// Re-read `config.ron`: `Some(new_config)` if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = std::fs::read_to_string(Self::file_path(config_dir))
            .map_err(ConfigError::ReadError)?;
        let new_config: ToolConfig = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            tracing::info!("tool config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = ToolConfig::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("rotation_fallback: Stored"));
        assert!(ron_str.contains("log_level: \"info\""));
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: ToolConfig = ron::from_str("(debug: (log_level: \"debug\"))").unwrap();
        assert_eq!(config.storage, StorageConfig::default());
        assert_eq!(config.telehub.rotation_fallback, RotationFallback::Stored);
        assert_eq!(config.debug.log_level, "debug");
    }

    #[test]
    fn test_legacy_rotation_parses() {
        let config: ToolConfig =
            ron::from_str("(telehub: (rotation_fallback: Legacy))").unwrap();
        assert_eq!(config.telehub.rotation_fallback, RotationFallback::Legacy);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<ToolConfig, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<ToolConfig, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let storage = StorageConfig {
            data_dir: Some(PathBuf::from("/srv/regions")),
            pretty: false,
        };
        assert_eq!(
            storage.resolve_data_dir().unwrap(),
            PathBuf::from("/srv/regions")
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ToolConfig::default();
        config.storage.data_dir = Some(dir.path().join("regions"));
        config.telehub.rotation_fallback = RotationFallback::Legacy;

        config.save(dir.path()).unwrap();
        let loaded = ToolConfig::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ToolConfig::load_or_create(dir.path()).unwrap();
        assert_eq!(config, ToolConfig::default());
        assert!(ToolConfig::file_path(dir.path()).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = ToolConfig::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());

        let mut modified = config.clone();
        modified.debug.log_level = "trace".to_string();
        modified.save(dir.path()).unwrap();

        let reloaded = config.reload(dir.path()).unwrap();
        assert_eq!(reloaded.map(|c| c.debug.log_level), Some("trace".to_string()));
    }
}
