// SPDX-License-Identifier: MPL-2.0
//! Operator configuration, loaded from and saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Default language, OS locale detection, theme mode
//! - `[carousel]` - Autoplay timer and drag commit threshold
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` or set `ICED_VITRINE_CONFIG_DIR`
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_vitrine::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.default_language = "fr".to_string();
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Language used when no preference applies. Must name a map in the
    /// translation table; acts as the fallback tier of every lookup.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Whether the OS locale participates in startup language resolution.
    /// Off by default: a kiosk in a lobby should not follow the locale of
    /// the machine it happens to run on.
    #[serde(default)]
    pub detect_system_locale: bool,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            detect_system_locale: false,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Slide deck settings, shared by every carousel on the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Whether the shared autoplay timer runs at all.
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,

    /// Seconds between autoplay steps.
    #[serde(default = "default_autoplay_interval_secs")]
    pub autoplay_interval_secs: u64,

    /// Pointer displacement (logical pixels) beyond which releasing a drag
    /// commits a slide change.
    #[serde(default = "default_drag_commit_threshold")]
    pub drag_commit_threshold: f32,
}

impl CarouselConfig {
    /// The autoplay interval as a duration, clamped to sane bounds so an
    /// operator typo cannot spin the timer.
    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_secs(self.autoplay_interval_secs.clamp(
            MIN_AUTOPLAY_INTERVAL_SECS,
            MAX_AUTOPLAY_INTERVAL_SECS,
        ))
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            autoplay_interval_secs: default_autoplay_interval_secs(),
            drag_commit_threshold: default_drag_commit_threshold(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Slide deck settings.
    #[serde(default)]
    pub carousel: CarouselConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_language() -> String {
    crate::i18n::DEFAULT_LANGUAGE.to_string()
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_autoplay() -> bool {
    true
}

fn default_autoplay_interval_secs() -> u64 {
    DEFAULT_AUTOPLAY_INTERVAL_SECS
}

fn default_drag_commit_threshold() -> f32 {
    DEFAULT_DRAG_COMMIT_THRESHOLD
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning). If loading fails, returns
/// the default config with a warning key explaining what went wrong. A
/// missing file is not a failure; a kiosk may run its whole life on
/// defaults.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.default_language, "en");
        assert!(!config.general.detect_system_locale);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(config.carousel.autoplay);
        assert_eq!(
            config.carousel.autoplay_interval_secs,
            DEFAULT_AUTOPLAY_INTERVAL_SECS
        );
        assert_eq!(
            config.carousel.drag_commit_threshold,
            DEFAULT_DRAG_COMMIT_THRESHOLD
        );
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                default_language: "fr".to_string(),
                detect_system_locale: true,
                theme_mode: ThemeMode::Light,
            },
            carousel: CarouselConfig {
                autoplay: false,
                autoplay_interval_secs: 8,
                drag_commit_threshold: 64.0,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"").expect("write file");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("invalid theme_mode")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"DARK\"").expect("write file");

        let loaded = load_from_path(&config_path).expect("load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[carousel]\nautoplay = false").expect("write file");

        let loaded = load_from_path(&config_path).expect("load config");

        assert!(!loaded.carousel.autoplay);
        assert_eq!(
            loaded.carousel.autoplay_interval_secs,
            DEFAULT_AUTOPLAY_INTERVAL_SECS
        );
        assert_eq!(loaded.general.default_language, "en");
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");

        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(
            content.contains("[general]"),
            "should have [general] section"
        );
        assert!(
            content.contains("[carousel]"),
            "should have [carousel] section"
        );
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                default_language: "de".to_string(),
                detect_system_locale: false,
                theme_mode: ThemeMode::Dark,
            },
            carousel: CarouselConfig {
                autoplay: true,
                autoplay_interval_secs: 12,
                drag_commit_threshold: 25.0,
            },
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(
            warning.as_deref(),
            Some("notification-config-load-error"),
            "should warn about parse error"
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn multiple_isolated_config_dirs_dont_interfere() {
        let temp_dir_a = tempdir().expect("create temp dir A");
        let config_a = Config {
            general: GeneralConfig {
                default_language: "fr".to_string(),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        save_with_override(&config_a, Some(temp_dir_a.path().to_path_buf()))
            .expect("save A should succeed");

        let temp_dir_b = tempdir().expect("create temp dir B");
        let config_b = Config {
            general: GeneralConfig {
                default_language: "es".to_string(),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        save_with_override(&config_b, Some(temp_dir_b.path().to_path_buf()))
            .expect("save B should succeed");

        let (loaded_a, _) = load_with_override(Some(temp_dir_a.path().to_path_buf()));
        let (loaded_b, _) = load_with_override(Some(temp_dir_b.path().to_path_buf()));

        assert_eq!(loaded_a.general.default_language, "fr");
        assert_eq!(loaded_b.general.default_language, "es");
    }

    #[test]
    fn autoplay_interval_is_clamped() {
        let mut config = CarouselConfig::default();

        config.autoplay_interval_secs = 0;
        assert_eq!(
            config.autoplay_interval(),
            Duration::from_secs(MIN_AUTOPLAY_INTERVAL_SECS)
        );

        config.autoplay_interval_secs = 10_000;
        assert_eq!(
            config.autoplay_interval(),
            Duration::from_secs(MAX_AUTOPLAY_INTERVAL_SECS)
        );

        config.autoplay_interval_secs = DEFAULT_AUTOPLAY_INTERVAL_SECS;
        assert_eq!(config.autoplay_interval(), Duration::from_secs(5));
    }
}
