//! PID file lifecycle for detecting an already-running daemon instance.
//!
//! The PID file lives at a fixed name inside the run directory provided by
//! [`crate::layout::Layout`]. This module reads, writes and validates that
//! file; it never deletes it and takes no file locks. Whether a live PID
//! is fatal (for example, refusing to start a second daemon) is a decision
//! left to the command layer.

mod file;
mod process;

pub use file::{read_pid_file, write_pid_file};
pub use process::is_process_running;
