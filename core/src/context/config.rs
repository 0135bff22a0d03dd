//! Application configuration
//!
//! This module re-exports shared types from sunderlog-types and provides
//! platform-specific defaults and persistence for AppConfig.

use std::path::PathBuf;

pub use sunderlog_types::{AppConfig, DEFAULT_ABILITY_NAME, DEFAULT_TOP_N, Encounter};

use super::ConfigError;

const APP_NAME: &str = "sunderlog";
const CONFIG_NAME: &str = "config";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Defaults
// ─────────────────────────────────────────────────────────────────────────────

const CLASSIC_LOG_RELATIVE: &str = "World of Warcraft/_classic_/Logs/WoWCombatLog.txt";

pub fn default_log_path() -> String {
    #[cfg(target_os = "windows")]
    {
        r"C:\Program Files (x86)\World of Warcraft\_classic_\Logs\WoWCombatLog.txt".to_string()
    }
    #[cfg(not(target_os = "windows"))]
    {
        dirs::home_dir()
            .map(|p| p.join(CLASSIC_LOG_RELATIVE))
            .and_then(|p| p.to_str().map(String::from))
            .unwrap_or_else(|| CLASSIC_LOG_RELATIVE.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence
pub trait AppConfigExt: Sized {
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn load_with_defaults() -> Self;
    fn save(&self) -> Result<(), ConfigError>;
    fn config_path() -> Option<PathBuf>;
}

impl AppConfigExt for AppConfig {
    /// Falls back to defaults when the file is missing or unreadable
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Using default configuration");
            Self::load_with_defaults()
        })
    }

    /// Reads the config file without creating it; a missing file yields defaults
    fn try_load() -> Result<Self, ConfigError> {
        let path = confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)?;
        if !path.exists() {
            tracing::debug!(path = ?path, "No configuration file");
            return Ok(Self::load_with_defaults());
        }
        let mut config: AppConfig = confy::load_path(&path)?;
        if config.log_path.is_empty() {
            config.log_path = default_log_path();
        }
        Ok(config)
    }

    /// Load with platform-specific defaults (used when no config file exists)
    fn load_with_defaults() -> Self {
        AppConfig::with_log_path(default_log_path())
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn config_path() -> Option<PathBuf> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_points_at_classic_log() {
        let path = default_log_path();
        assert!(path.ends_with("WoWCombatLog.txt"));
        assert!(path.contains("_classic_"));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::load_with_defaults();
        assert_eq!(config.log_path, default_log_path());
        assert_eq!(config.ability_name, DEFAULT_ABILITY_NAME);
        assert_eq!(config.top_n, DEFAULT_TOP_N);
        assert_eq!(config.encounter, Encounter::BlackwingLair);
    }
}
