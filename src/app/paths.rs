// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! The kiosk keeps two directories apart: the data directory holds the
//! visitor-facing session state (`state.cbor` with the remembered language),
//! the config directory holds the operator settings (`settings.toml`).
//!
//! Each directory resolves in priority order:
//! 1. Explicit override passed to a `_with_override()` function (tests)
//! 2. CLI argument (`--data-dir`, `--config-dir`), set via [`init_cli_overrides`]
//! 3. Environment variable (`ICED_VITRINE_DATA_DIR`, `ICED_VITRINE_CONFIG_DIR`)
//! 4. Platform default via the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedVitrine";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_VITRINE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_VITRINE_CONFIG_DIR";

/// CLI override for the data directory (set once at startup).
static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Stores the `--data-dir` and `--config-dir` CLI arguments.
///
/// Must be called once at startup, before any path resolution.
///
/// # Panics
///
/// Panics when called more than once.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    CLI_DATA_DIR
        .set(data_dir.map(PathBuf::from))
        .expect("CLI data dir override already initialized");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

/// The directory holding session state (`state.cbor`).
///
/// Returns `None` when the platform default cannot be determined and no
/// override is in effect.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Like [`get_app_data_dir`], with an explicit highest-priority override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// The directory holding operator settings (`settings.toml`).
///
/// Returns `None` when the platform default cannot be determined and no
/// override is in effect.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Like [`get_app_config_dir`], with an explicit highest-priority override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir,
    )
}

/// Walks the override, CLI, environment, platform-default cascade.
fn resolve_dir(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_name: &str,
    platform_dir: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_name) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
