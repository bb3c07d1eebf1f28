//! Version-control ignore port
//!
//! Defines the interface for asking whether version control ignores a path.

use std::path::Path;

/// Answers "is this path ignored by version control?"
///
/// Implementations must not fail: a lookup that cannot be answered reports the
/// path as not ignored, so an oracle error never drops a file from the build.
#[cfg_attr(test, mockall::automock)]
pub trait IgnoreOracle: Send + Sync {
    /// Check whether the file at `path` (absolute) is ignored
    fn is_ignored(&self, path: &Path) -> bool;
}
