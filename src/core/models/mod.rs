//! Domain models for docs-exclude
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`GlobPattern`] / [`RegexPattern`] - Compiled path patterns
//! - [`PatternSet`] - The globs and regexes of one rule tier
//! - [`CandidateFile`] - A discovered source file awaiting a verdict
//! - [`Decision`] - A verdict plus the rule that produced it

mod candidate;
mod decision;
mod pattern;
mod pattern_set;

pub use candidate::CandidateFile;
pub use decision::Decision;
pub use pattern::{GlobPattern, PatternError, RegexPattern};
pub use pattern_set::{PatternMatch, PatternSet};
