//! Config file discovery and loading.
//!
//! Handles finding the config file and creating it on first run. The search
//! order is:
//!
//! 1. `$XDG_CONFIG_HOME/mpwt/config.toml`
//! 2. `~/.config/mpwt/config.toml`
//!
//! The history store and log file live under the platform data directory
//! (`dirs::data_dir()`), e.g. `~/.local/share/mpwt` or `%APPDATA%\mpwt`.

use crate::config::{Config, DEFAULT_CONFIG};
use crate::error::{MpwtError, Result};
use std::path::{Path, PathBuf};

/// Determine the config file path.
///
/// Checks locations in order of preference:
/// 1. `$XDG_CONFIG_HOME/mpwt/config.toml` (if XDG_CONFIG_HOME is set)
/// 2. `~/.config/mpwt/config.toml`
///
/// If no existing config is found, returns `~/.config/mpwt/config.toml`
/// as the default location for new configs.
///
/// # Errors
///
/// Returns [`MpwtError::NoConfigDir`] if the home directory cannot be determined.
pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("mpwt").join("config.toml");
        if path.exists() {
            return Ok(path);
        }
    }

    let home = dirs::home_dir().ok_or(MpwtError::NoConfigDir)?;
    Ok(home.join(".config").join("mpwt").join("config.toml"))
}

/// Directory holding the history store and log file.
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or(MpwtError::NoConfigDir)?;
    Ok(dir.join("mpwt"))
}

/// Default location of the history and favourites store.
pub fn default_store_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("store.json"))
}

/// Default location of the log file.
pub fn default_log_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("mpwt.log"))
}

/// Load and parse a config file from the given path.
///
/// # Errors
///
/// - [`MpwtError::ConfigNotFound`] if the file doesn't exist
/// - [`MpwtError::IoError`] if reading fails
/// - [`MpwtError::ParseError`] or [`MpwtError::InvalidConfig`] if the
///   contents are not a usable config
pub fn load_config(path: &Path) -> Result<Config> {
    let contents = read_raw(path)?;
    Config::from_str(&contents)
}

/// Load the config at `path`, writing the default template first if the
/// file does not exist yet.
pub fn load_or_init(path: &Path) -> Result<Config> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, DEFAULT_CONFIG)?;
        tracing::info!(path = %path.display(), "created default config");
    }
    load_config(path)
}

/// Read the config file as text, with Windows line endings normalized.
pub fn read_raw(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(MpwtError::ConfigNotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(contents.replace("\r\n", "\n"))
}

/// Replace the config file with `contents`.
///
/// The new text is parsed and validated first; an invalid config leaves the
/// existing file untouched.
pub fn write_raw(path: &Path, contents: &str) -> Result<Config> {
    let config = Config::from_str(contents)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(config)
}
