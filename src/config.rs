// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config::{self, Config};
//!
//! let mut config = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const CONFIG_DIR_ENV: &str = "ICED_FOLIO_CONFIG_DIR";
const CONFIG_SUBDIR: &str = "iced_folio";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Persisted user preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

/// Resolves the directory holding `settings.toml`.
///
/// The `ICED_FOLIO_CONFIG_DIR` environment variable takes precedence so tests
/// and portable installs never touch the real user configuration.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }

    dirs::config_dir().map(|dir| dir.join(CONFIG_SUBDIR))
}

fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration, falling back to defaults when the file is
/// missing or unreadable. Startup must never fail because of a bad config.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from_path(&path).unwrap_or_default(),
        None => Config::default(),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).map_err(|err| Error::Config(format!("read {path:?}: {err}")))?;

    toml::from_str(&contents).map_err(|err| Error::Config(format!("parse {path:?}: {err}")))
}

/// Saves the configuration to the resolved platform location.
pub fn save(config: &Config) -> Result<()> {
    let path = config_path()
        .ok_or_else(|| Error::Config("no configuration directory available".to_string()))?;

    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| Error::Config(format!("create {parent:?}: {err}")))?;
    }

    let contents = toml::to_string_pretty(config)
        .map_err(|err| Error::Config(format!("serialize config: {err}")))?;

    fs::write(path, contents).map_err(|err| Error::Config(format!("write {path:?}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_system_theme_and_no_language() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
        };

        save_to_path(&config, &path).expect("save config");
        let loaded = load_from_path(&path).expect("load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_missing_path_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("does-not-exist.toml");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn unknown_theme_mode_fails_to_parse() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"sepia\"\n").expect("write config");

        assert!(load_from_path(&path).is_err());
    }
}
