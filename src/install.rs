//! Installs and uninstalls the tool's managed directories and binary.
//!
//! The installer is the one place that creates the prefix-rooted directory
//! tree; path derivation itself never touches the filesystem.

use crate::layout::Layout;
use nix::unistd::{chown, geteuid, Gid, Uid};
use std::env;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Creates the managed directory tree and copies the currently running
/// executable into the binary directory.
///
/// # Errors
///
/// Returns an error if a directory cannot be created, the current
/// executable path cannot be determined, or the copy fails.
pub fn install(layout: &Layout) -> io::Result<()> {
    for dir in [
        layout.etc_dir_path(),
        layout.run_dir_path(),
        layout.log_dir_path(),
        layout.lib_dir_path(),
        layout.bin_dir_path(),
    ] {
        fs::create_dir_all(dir)?;
    }

    let source = env::current_exe()?;
    let target = layout.bin_file_path();
    fs::copy(&source, &target)?;
    fs::set_permissions(&target, fs::Permissions::from_mode(0o755))?;

    Ok(())
}

/// Re-owns the installed binary and the managed directories to root.
///
/// Does nothing when the effective user is not root, so unprivileged
/// installs into a custom prefix still succeed.
///
/// # Errors
///
/// Returns an error if any ownership change fails.
pub fn chown_root(layout: &Layout) -> io::Result<()> {
    if !geteuid().is_root() {
        return Ok(());
    }

    let root_uid = Some(Uid::from_raw(0));
    let root_gid = Some(Gid::from_raw(0));

    for path in [
        layout.etc_dir_path(),
        layout.run_dir_path(),
        layout.log_dir_path(),
        layout.lib_dir_path(),
        layout.bin_file_path(),
    ] {
        chown(&path, root_uid, root_gid).map_err(io::Error::from)?;
    }

    Ok(())
}

/// Removes the managed directory trees and, unless a package manager owns
/// it, the installed binary.
///
/// Pass `package_manager = true` when a package manager is performing the
/// uninstallation; the binary is then left in place for the package
/// manager to remove. Already-absent paths are not errors.
///
/// # Errors
///
/// Returns an error if an existing directory tree or the binary cannot be
/// removed.
pub fn uninstall(layout: &Layout, package_manager: bool) -> io::Result<()> {
    for dir in [
        layout.etc_dir_path(),
        layout.run_dir_path(),
        layout.log_dir_path(),
        layout.lib_dir_path(),
    ] {
        remove_if_present(&dir, fs::remove_dir_all)?;
    }

    if !package_manager {
        remove_if_present(&layout.bin_file_path(), fs::remove_file)?;
    }

    Ok(())
}

fn remove_if_present<F>(path: &Path, remove: F) -> io::Result<()>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    match remove(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
