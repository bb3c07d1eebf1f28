//! Candidate file records
//!
//! A candidate is a file the host build discovered, before any filtering.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A source file offered to the filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateFile {
    /// Path relative to the docs directory, as reported by discovery.
    ///
    /// May use the platform's native separator.
    pub src_path: String,

    /// Absolute path, used for version-control ignore lookups
    pub abs_src_path: PathBuf,
}

impl CandidateFile {
    /// Create a candidate from both of its paths
    pub fn new(src_path: impl Into<String>, abs_src_path: impl Into<PathBuf>) -> Self {
        Self {
            src_path: src_path.into(),
            abs_src_path: abs_src_path.into(),
        }
    }

    /// Create a candidate whose absolute path is `docs_dir/src_path`
    pub fn under(docs_dir: &Path, src_path: impl Into<String>) -> Self {
        let src_path = src_path.into();
        let abs_src_path = docs_dir.join(&src_path);
        Self {
            src_path,
            abs_src_path,
        }
    }
}
