//! Defines the `Config` struct and its implementation.

use crate::constants::DEFAULT_LOG_FILE_NAME;

/// On-disk tool configuration, stored as JSON in the etc directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Installation prefix to use when neither the command line nor the
    /// environment supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Log file name inside the log directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl Config {
    /// Creates a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configured log file name, or the default when unset.
    pub fn log_file_name(&self) -> &str {
        self.log_file.as_deref().unwrap_or(DEFAULT_LOG_FILE_NAME)
    }
}
