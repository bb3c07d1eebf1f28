//! `git check-ignore` invocation
//!
//! Runs the command for one path and interprets its exit status.

use std::path::Path;
use std::process::{Command, Stdio};

/// What `git check-ignore` reported for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreStatus {
    /// Exit code 0: the path is ignored
    Ignored,
    /// Exit code 1: the path is not ignored
    NotIgnored,
    /// Any other outcome, e.g. 128 when git cannot follow a symlink.
    ///
    /// Holds the exit code, or `None` when the process died from a signal.
    Unknown(Option<i32>),
}

impl IgnoreStatus {
    /// Interpret a `git check-ignore` exit code
    #[must_use]
    pub const fn from_exit_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => Self::Ignored,
            Some(1) => Self::NotIgnored,
            other => Self::Unknown(other),
        }
    }

    /// Whether the file should be dropped. Unknown outcomes keep the file.
    #[must_use]
    pub const fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// Run `git check-ignore <path>` from `workdir`
///
/// # Errors
///
/// Returns an error if git cannot be spawned (not installed, bad working directory).
pub fn check_ignore(workdir: &Path, path: &Path) -> anyhow::Result<IgnoreStatus> {
    let output = Command::new("git")
        .current_dir(workdir)
        .arg("check-ignore")
        .arg(path)
        .stdin(Stdio::null())
        .output()?;

    Ok(IgnoreStatus::from_exit_code(output.status.code()))
}
