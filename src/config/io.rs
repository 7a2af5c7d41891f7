//! Handles all file input/output operations for the configuration.

use super::structure::Config;
use crate::constants::{CONFIG_FILE_NAME, PREFIX_ENV_VAR};
use crate::layout::Layout;
use std::env;
use std::fs;
use std::io::{self, Error, ErrorKind};
use std::path::Path;

/// Loads the configuration from `<etc dir>/config.json` of the given
/// layout.
///
/// A missing or empty file yields the default configuration.
///
/// # Errors
///
/// Returns an error if:
/// - File reading fails
/// - JSON parsing fails (`ErrorKind::InvalidData`)
pub fn load_config(layout: &Layout) -> io::Result<Config> {
    load_config_from_file(&layout.etc_file_path(CONFIG_FILE_NAME))
}

/// Loads the configuration from an explicit file path.
pub fn load_config_from_file(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)?;
    let trimmed = contents.trim();

    if trimmed.is_empty() {
        return Ok(Config::default());
    }

    serde_json::from_str(trimmed).map_err(|e| {
        Error::new(
            ErrorKind::InvalidData,
            format!(
                "Failed to parse configuration file at {}: {}",
                path.display(),
                e
            ),
        )
    })
}

/// Saves the configuration to `<etc dir>/config.json` of the given layout.
///
/// # Errors
///
/// Returns an error if:
/// - Directory creation fails
/// - JSON serialization fails
/// - File writing fails
pub fn save_config(layout: &Layout, config: &Config) -> io::Result<()> {
    save_config_to_file(config, &layout.etc_file_path(CONFIG_FILE_NAME))
}

/// Saves the configuration to an explicit file path.
pub fn save_config_to_file(config: &Config, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut contents = serde_json::to_string_pretty(config).map_err(|e| {
        Error::new(
            ErrorKind::InvalidData,
            format!("Failed to serialize configuration: {}", e),
        )
    })?;

    if !contents.ends_with('\n') {
        contents.push('\n');
    }

    fs::write(path, contents)
}

/// Resolves the installation prefix for this invocation.
///
/// Sources, in order of precedence: the explicit command-line value, the
/// `WARDEN_PREFIX` environment variable, the `prefix` field of the
/// configuration file in the unprefixed etc directory. Falls back to the
/// empty (root) prefix.
///
/// # Errors
///
/// Returns an error if the configuration file exists but cannot be read
/// or parsed.
pub fn resolve_prefix(flag: Option<String>) -> io::Result<String> {
    if let Some(prefix) = flag {
        return Ok(prefix);
    }

    if let Ok(prefix) = env::var(PREFIX_ENV_VAR) {
        return Ok(prefix);
    }

    let config = load_config(&Layout::new())?;
    Ok(config.prefix.unwrap_or_default())
}
