//! Filtering decisions
//!
//! A [`Decision`] records both the verdict for a path and the rule that produced it.

use std::fmt;

use serde::Serialize;

/// Outcome of classifying one path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "pattern", rename_all = "snake_case")]
pub enum Decision {
    /// Kept by an include glob
    IncludedByGlob(String),
    /// Kept by an include regex
    IncludedByRegex(String),
    /// Dropped by an exclude glob
    ExcludedByGlob(String),
    /// Dropped by an exclude regex
    ExcludedByRegex(String),
    /// Dropped because version control ignores the file
    IgnoredByVcs,
    /// Kept because no rule matched
    Default,
}

impl Decision {
    /// Whether the file stays in the build
    #[must_use]
    pub const fn is_included(&self) -> bool {
        matches!(self, Self::IncludedByGlob(_) | Self::IncludedByRegex(_) | Self::Default)
    }

    /// The pattern that fired, if any
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::IncludedByGlob(p)
            | Self::IncludedByRegex(p)
            | Self::ExcludedByGlob(p)
            | Self::ExcludedByRegex(p) => Some(p),
            Self::IgnoredByVcs | Self::Default => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncludedByGlob(p) => write!(f, "included by glob `{p}`"),
            Self::IncludedByRegex(p) => write!(f, "included by regex `{p}`"),
            Self::ExcludedByGlob(p) => write!(f, "excluded by glob `{p}`"),
            Self::ExcludedByRegex(p) => write!(f, "excluded by regex `{p}`"),
            Self::IgnoredByVcs => write!(f, "ignored by git"),
            Self::Default => write!(f, "no rule matched"),
        }
    }
}
