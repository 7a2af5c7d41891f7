//! Build metadata and the `version` command report.

use chrono::DateTime;
use std::env;
use std::io::{self, Write};

/// Build-time metadata describing this binary.
///
/// The branch, commit and epoch fields are baked in through the
/// `WARDEN_BRANCH`, `WARDEN_COMMIT` and `WARDEN_EPOCH` environment
/// variables at compile time; release builds set them from CI, and local
/// builds fall back to placeholder values.
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Semantic version of the crate
    pub semver: String,
    /// Target operating system and architecture, e.g. `linux-x86_64`
    pub os_arch: String,
    /// Source branch the binary was built from
    pub branch: String,
    /// Commit hash the binary was built from
    pub commit: String,
    /// Build time as decimal Unix seconds
    pub epoch: String,
}

impl BuildInfo {
    /// Collects the metadata baked in at compile time.
    pub fn from_build_env() -> Self {
        BuildInfo {
            semver: env!("CARGO_PKG_VERSION").to_string(),
            os_arch: format!("{}-{}", env::consts::OS, env::consts::ARCH),
            branch: option_env!("WARDEN_BRANCH").unwrap_or("unknown").to_string(),
            commit: option_env!("WARDEN_COMMIT").unwrap_or("unknown").to_string(),
            epoch: option_env!("WARDEN_EPOCH").unwrap_or("").to_string(),
        }
    }

    /// Formats the build epoch as an RFC 2822 timestamp.
    ///
    /// Returns `unknown` when the epoch is absent or not a valid number of
    /// Unix seconds.
    pub fn formed(&self) -> String {
        self.epoch
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|ts| ts.to_rfc2822())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Writes the version report for the `version` command.
///
/// # Errors
///
/// Returns an error if the current executable path cannot be determined
/// or the writer fails.
pub fn print_version<W: Write>(info: &BuildInfo, out: &mut W) -> io::Result<()> {
    let binary = env::current_exe()?;
    writeln!(out, "Binary: {}", binary.display())?;
    writeln!(out, "SemVer: {}", info.semver)?;
    writeln!(out, "OsArch: {}", info.os_arch)?;
    writeln!(out, "Branch: {}", info.branch)?;
    writeln!(out, "Commit: {}", info.commit)?;
    writeln!(out, "Formed: {}", info.formed())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_info() -> BuildInfo {
        BuildInfo {
            semver: "1.0.0".to_string(),
            os_arch: "linux-x86_64".to_string(),
            branch: "master".to_string(),
            commit: "0123456789abcdef0123456789abcdef01234567".to_string(),
            epoch: "1136239445".to_string(),
        }
    }

    #[test]
    fn test_formed_from_epoch() {
        let info = sample_info();
        assert_eq!(info.formed(), "Mon, 02 Jan 2006 22:04:05 +0000");
    }

    #[test]
    fn test_formed_with_missing_or_invalid_epoch() {
        let mut info = sample_info();

        info.epoch = String::new();
        assert_eq!(info.formed(), "unknown");

        info.epoch = "not-a-number".to_string();
        assert_eq!(info.formed(), "unknown");
    }

    #[test]
    fn test_print_version_format() {
        let info = sample_info();

        let mut buf = Vec::new();
        print_version(&info, &mut buf).unwrap();
        let report = String::from_utf8(buf).unwrap();

        let binary = env::current_exe().unwrap();
        let expected = format!(
            "Binary: {}\n\
             SemVer: 1.0.0\n\
             OsArch: linux-x86_64\n\
             Branch: master\n\
             Commit: 0123456789abcdef0123456789abcdef01234567\n\
             Formed: Mon, 02 Jan 2006 22:04:05 +0000\n",
            binary.display()
        );

        assert_eq!(report, expected);
    }

    #[test]
    fn test_from_build_env_defaults() {
        let info = BuildInfo::from_build_env();

        assert_eq!(info.semver, env!("CARGO_PKG_VERSION"));
        assert!(info.os_arch.contains('-'));
        assert!(!info.branch.is_empty());
        assert!(!info.commit.is_empty());
    }
}
