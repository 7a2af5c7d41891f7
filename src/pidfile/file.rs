//! Reading and writing the PID file beneath the run directory.

use crate::layout::Layout;
use std::fs;
use std::io::{self, Error, ErrorKind};

/// Writes `pid` to the PID file as its decimal string representation,
/// creating or truncating the file. A negative `pid` is replaced by the
/// calling process's own id.
///
/// The run directory is not created here; writing into a missing or
/// unwritable run directory fails with the underlying filesystem error so
/// that a skipped installation is not masked.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be written
/// (missing parent directory, permission denied, parent is not a
/// directory, etc.).
pub fn write_pid_file(layout: &Layout, pid: i32) -> io::Result<()> {
    let pid = if pid < 0 {
        std::process::id() as i32
    } else {
        pid
    };
    fs::write(layout.pid_file_path(), pid.to_string())
}

/// Reads the PID recorded in the PID file.
///
/// # Errors
///
/// - `ErrorKind::NotFound` if the PID file does not exist (no current
///   process is recorded)
/// - `ErrorKind::InvalidData` if the content is not a valid non-negative
///   integer
/// - any other underlying I/O error, propagated verbatim
pub fn read_pid_file(layout: &Layout) -> io::Result<i32> {
    let contents = fs::read_to_string(layout.pid_file_path())?;
    let pid_str = contents.trim();

    if pid_str.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidData,
            "PID file is empty or contains no valid PID",
        ));
    }

    let pid = pid_str.parse::<i32>().map_err(|_| {
        Error::new(
            ErrorKind::InvalidData,
            format!("Invalid PID in file: '{}'", pid_str),
        )
    })?;

    if pid < 0 {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("Invalid PID in file: '{}'", pid_str),
        ));
    }

    Ok(pid)
}
