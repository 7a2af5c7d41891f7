//! Derives the tool's runtime directory layout from an installation prefix.
//!
//! Every path is computed on demand as the prefix joined with a fixed
//! relative suffix. Querying a path never creates a directory; filesystem
//! mutation is the installer's concern.

use crate::constants::{PID_FILE_NAME, PREFIX_ENV_VAR, TOOL_NAME};
use std::env;
use std::path::PathBuf;

/// Resolves the managed directory and file paths beneath an optional
/// installation prefix.
///
/// The prefix defaults to the empty string, which roots all derived paths
/// at the filesystem root. Construct one `Layout` per logical instance and
/// pass it by reference to the PID-file functions and the installer; there
/// is no process-wide prefix state.
///
/// Derivation is a pure string computation: no validation, no I/O, and the
/// same prefix always yields the same paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    prefix: String,
}

impl Layout {
    /// Creates a layout with the default (empty) prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a layout rooted at the given prefix.
    pub fn with_prefix<S: Into<String>>(prefix: S) -> Self {
        Layout {
            prefix: prefix.into(),
        }
    }

    /// Creates a layout from the `WARDEN_PREFIX` environment variable.
    ///
    /// An unset variable yields the default layout. Intended to be called
    /// once at process start by embedding programs.
    pub fn from_env() -> Self {
        match env::var(PREFIX_ENV_VAR) {
            Ok(prefix) => Self::with_prefix(prefix),
            Err(_) => Self::new(),
        }
    }

    /// Replaces the current prefix. The value is stored verbatim; no
    /// existence check is performed and the last write wins.
    pub fn set_prefix<S: Into<String>>(&mut self, prefix: S) {
        self.prefix = prefix.into();
    }

    /// Returns the current prefix verbatim.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `true` iff the prefix roots the layout somewhere other than
    /// the filesystem root. Both `""` and `"/"` count as unprefixed.
    pub fn is_prefixed(&self) -> bool {
        !(self.prefix.is_empty() || self.prefix == "/")
    }

    /// `<prefix>/etc/warden`
    pub fn etc_dir_path(&self) -> PathBuf {
        PathBuf::from(format!("{}/etc/{}", self.prefix, TOOL_NAME))
    }

    /// `<prefix>/etc/warden/<name>`
    pub fn etc_file_path(&self, name: &str) -> PathBuf {
        self.etc_dir_path().join(name)
    }

    /// `<prefix>/var/run/warden`
    pub fn run_dir_path(&self) -> PathBuf {
        PathBuf::from(format!("{}/var/run/{}", self.prefix, TOOL_NAME))
    }

    /// `<prefix>/var/log/warden`
    pub fn log_dir_path(&self) -> PathBuf {
        PathBuf::from(format!("{}/var/log/{}", self.prefix, TOOL_NAME))
    }

    /// `<prefix>/var/log/warden/<name>`
    pub fn log_file_path(&self, name: &str) -> PathBuf {
        self.log_dir_path().join(name)
    }

    /// `<prefix>/var/lib/warden`
    pub fn lib_dir_path(&self) -> PathBuf {
        PathBuf::from(format!("{}/var/lib/{}", self.prefix, TOOL_NAME))
    }

    /// `<prefix>/var/lib/warden/<name>`
    pub fn lib_file_path(&self, name: &str) -> PathBuf {
        self.lib_dir_path().join(name)
    }

    /// `<prefix>/usr/bin`
    pub fn bin_dir_path(&self) -> PathBuf {
        PathBuf::from(format!("{}/usr/bin", self.prefix))
    }

    /// `<prefix>/usr/bin/warden`
    pub fn bin_file_path(&self) -> PathBuf {
        self.bin_dir_path().join(TOOL_NAME)
    }

    /// `<prefix>/var/run/warden/warden.pid`
    pub fn pid_file_path(&self) -> PathBuf {
        self.run_dir_path().join(PID_FILE_NAME)
    }
}
