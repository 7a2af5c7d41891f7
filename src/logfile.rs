//! Tee writer that duplicates daemon output to stdout and a log file.

use crate::layout::Layout;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};

/// A writer that forwards everything it receives to both stdout and a log
/// file inside the log directory.
#[derive(Debug)]
pub struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

/// Opens `<log dir>/<name>` for appending and returns a writer that copies
/// its output to stdout and the file.
///
/// The log directory is created if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log file
/// cannot be opened (for example, when `name` resolves to a directory).
pub fn stdout_and_log_file(layout: &Layout, name: &str) -> io::Result<TeeWriter> {
    fs::create_dir_all(layout.log_dir_path())?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(layout.log_file_path(name))?;

    Ok(TeeWriter { file })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_with_invalid_name() {
        let dir = tempdir().unwrap();
        let layout = Layout::with_prefix(dir.path().to_string_lossy().to_string());

        let result = stdout_and_log_file(&layout, "bad-file/");
        assert!(result.is_err(), "expected error for directory-like name");
    }

    #[test]
    fn test_open_creates_log_dir_and_file() {
        let dir = tempdir().unwrap();
        let layout = Layout::with_prefix(dir.path().to_string_lossy().to_string());

        let writer = stdout_and_log_file(&layout, "test.log").unwrap();
        drop(writer);

        assert!(layout.log_dir_path().exists());
        assert!(layout.log_file_path("test.log").exists());
    }

    #[test]
    fn test_writes_are_copied_to_file() {
        let dir = tempdir().unwrap();
        let layout = Layout::with_prefix(dir.path().to_string_lossy().to_string());

        let mut writer = stdout_and_log_file(&layout, "test.log").unwrap();
        writer.write_all(b"first line\n").unwrap();
        writer.flush().unwrap();

        let contents = fs::read_to_string(layout.log_file_path("test.log")).unwrap();
        assert_eq!(contents, "first line\n");

        // Reopening appends rather than truncating.
        let mut writer = stdout_and_log_file(&layout, "test.log").unwrap();
        writer.write_all(b"second line\n").unwrap();
        writer.flush().unwrap();

        let contents = fs::read_to_string(layout.log_file_path("test.log")).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }
}
