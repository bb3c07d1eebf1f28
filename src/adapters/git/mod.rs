//! Git integration adapter
//!
//! Implements `IgnoreOracle` using git commands.
//!
//! - [`check_ignore`] - `git check-ignore` invocation

pub mod check_ignore;

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::ports::IgnoreOracle;

pub use check_ignore::{IgnoreStatus, check_ignore};

/// Name of git's metadata directory, always treated as ignored
pub const GIT_DIR_NAME: &str = ".git";

/// Git-based ignore oracle
#[derive(Debug, Clone)]
pub struct GitIgnoreOracle {
    /// Directory git runs from; selects the repository whose rules apply
    workdir: PathBuf,
}

impl GitIgnoreOracle {
    /// Create an oracle that runs git from `workdir`
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }

    /// Directory git runs from
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Ask git about `path`, without the `.git` shortcut or error fallback
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be spawned.
    pub fn status(&self, path: &Path) -> anyhow::Result<IgnoreStatus> {
        check_ignore(&self.workdir, path)
    }
}

impl Default for GitIgnoreOracle {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

impl IgnoreOracle for GitIgnoreOracle {
    fn is_ignored(&self, path: &Path) -> bool {
        if path.file_name().is_some_and(|name| name == GIT_DIR_NAME) {
            return true;
        }

        match self.status(path) {
            Ok(IgnoreStatus::Unknown(code)) => {
                debug!(
                    "git check-ignore could not decide {} (exit {code:?}); keeping it",
                    path.display()
                );
                false
            },
            Ok(status) => status.is_ignored(),
            Err(err) => {
                warn!("failed to run git check-ignore for {}: {err}", path.display());
                false
            },
        }
    }
}
