// SPDX-License-Identifier: MPL-2.0
//! Session state persistence using CBOR format.
//!
//! This module handles state that persists across sessions but is not
//! operator-configurable (unlike preferences in `settings.toml`): today
//! that is the visitor's chosen language.
//!
//! State is stored in CBOR (Concise Binary Object Representation) format
//! for compact binary storage and clear separation from operator-editable
//! TOML preferences. Loss of this file is never user-facing; the kiosk
//! simply starts over from the configured default language.
//!
//! # Path Resolution
//!
//! The state file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from()`/`save_to()` with an explicit path override
//! 2. Pass `--data-dir` or set `ICED_VITRINE_DATA_DIR`
//! 3. Falls back to the platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Session state that persists across restarts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    /// Language the visitor last selected. `None` until the first explicit
    /// selection; startup resolution then skips this tier.
    #[serde(default)]
    pub language: Option<String>,
}

impl AppState {
    /// Loads session state from the default location.
    ///
    /// Returns a tuple of (state, optional warning key). If loading fails,
    /// returns the default state with a warning key explaining what went
    /// wrong. A missing file is the normal first-run case and produces no
    /// warning.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads session state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Saves session state to the default location.
    ///
    /// Creates the parent directory if it doesn't exist. Returns an optional
    /// warning key when the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves session state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    /// Returns the full path to the state file with optional override.
    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_language() {
        let state = AppState::default();
        assert!(state.language.is_none());
    }

    #[test]
    fn cbor_round_trip_preserves_state() {
        let temp_dir = tempdir().expect("create temp dir");
        let state_path = temp_dir.path().join("test_state.cbor");

        let original = AppState {
            language: Some("fr".to_string()),
        };

        {
            let file = fs::File::create(&state_path).expect("create file");
            let writer = BufWriter::new(file);
            ciborium::into_writer(&original, writer).expect("write cbor");
        }

        let loaded: AppState = {
            let file = fs::File::open(&state_path).expect("open file");
            let reader = BufReader::new(file);
            ciborium::from_reader(reader).expect("read cbor")
        };

        assert_eq!(original, loaded);
    }

    #[test]
    fn load_does_not_panic() {
        // AppState::load() must never panic, whether or not a real state
        // file exists on the machine running the tests.
        let _state = AppState::load();
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = AppState {
            language: Some("de".to_string()),
        };

        let save_result = original.save_to(Some(base_dir.clone()));
        assert!(save_result.is_none(), "save should succeed");

        let expected_path = base_dir.join(STATE_FILE);
        assert!(expected_path.exists(), "state file should exist");

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let state_path = base_dir.join(STATE_FILE);
        fs::write(&state_path, "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert_eq!(
            warning.as_deref(),
            Some("notification-state-parse-error"),
            "should warn about parse error"
        );
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn multiple_isolated_tests_dont_interfere() {
        let temp_dir_a = tempdir().expect("create temp dir A");
        let state_a = AppState {
            language: Some("fr".to_string()),
        };
        state_a.save_to(Some(temp_dir_a.path().to_path_buf()));

        let temp_dir_b = tempdir().expect("create temp dir B");
        let state_b = AppState {
            language: Some("es".to_string()),
        };
        state_b.save_to(Some(temp_dir_b.path().to_path_buf()));

        let (loaded_a, _) = AppState::load_from(Some(temp_dir_a.path().to_path_buf()));
        let (loaded_b, _) = AppState::load_from(Some(temp_dir_b.path().to_path_buf()));

        assert_eq!(loaded_a.language, Some("fr".to_string()));
        assert_eq!(loaded_b.language, Some("es".to_string()));
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let state = AppState {
            language: Some("en".to_string()),
        };

        let result = state.save_to(Some(nested_dir.clone()));
        assert!(result.is_none(), "save should succeed");
        assert!(nested_dir.join(STATE_FILE).exists());
    }
}
