//! Provides functionality for checking if a process is running.

use nix::sys::signal::kill;
use nix::unistd::Pid;

/// Checks whether a process with the given PID currently exists.
///
/// Sends signal 0, which performs the existence check without delivering
/// a signal. Returns `false` if the process does not exist or cannot be
/// signalled.
pub fn is_process_running(pid: i32) -> bool {
    kill(Pid::from_raw(pid), None).is_ok()
}
