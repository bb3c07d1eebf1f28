//! docs-exclude - Keep unwanted source files out of a static documentation build
//!
//! Given the candidate files a documentation build discovered, this library decides
//! per file whether it stays in the build, combining exclude globs and regexes,
//! include overrides, and optionally git's ignore rules.
//!
//! ```
//! use std::path::Path;
//!
//! use docs_exclude::config::ExcludeConfig;
//! use docs_exclude::core::models::CandidateFile;
//! use docs_exclude::core::services::filter_files;
//!
//! let config = ExcludeConfig::from_toml_str(r#"
//!     glob = "*.tmp"
//!     include-glob = ["keep/*.tmp"]
//! "#).unwrap();
//! let decider = config.decider(Path::new(".")).unwrap();
//!
//! let docs = Path::new("/site/docs");
//! let kept = filter_files(&decider, [
//!     CandidateFile::under(docs, "index.md"),
//!     CandidateFile::under(docs, "scratch.tmp"),
//!     CandidateFile::under(docs, "keep/data.tmp"),
//! ]);
//! let kept: Vec<_> = kept.iter().map(|f| f.src_path.as_str()).collect();
//! assert_eq!(kept, ["index.md", "keep/data.tmp"]);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
