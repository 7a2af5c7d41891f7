//! Shared constants used across the application.

/// The tool name used in the managed directory layout
pub const TOOL_NAME: &str = "warden";

/// The file name of the PID file inside the run directory
pub const PID_FILE_NAME: &str = "warden.pid";

/// The file name of the configuration file inside the etc directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default log file name inside the log directory
pub const DEFAULT_LOG_FILE_NAME: &str = "warden.log";

/// Environment variable that overrides the installation prefix
pub const PREFIX_ENV_VAR: &str = "WARDEN_PREFIX";
