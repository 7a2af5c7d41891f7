//! Support layer for the warden command-line tool.
//!
//! This library derives the tool's runtime directory layout (configuration,
//! run, log, library and binary paths) from an optional installation
//! prefix, and manages the PID file used to detect whether a daemon
//! instance is already running. Path derivation is pure; all filesystem
//! mutation happens in the explicit install/uninstall routines.

pub mod config;
pub mod constants;
pub mod install;
pub mod layout;
pub mod logfile;
pub mod pidfile;
pub mod version;

pub use config::{load_config, resolve_prefix, save_config, Config};
pub use install::{chown_root, install, uninstall};
pub use layout::Layout;
pub use logfile::{stdout_and_log_file, TeeWriter};
pub use pidfile::{is_process_running, read_pid_file, write_pid_file};
pub use version::{print_version, BuildInfo};
