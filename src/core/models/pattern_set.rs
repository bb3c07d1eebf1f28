//! Ordered pattern collections
//!
//! A [`PatternSet`] pairs the globs and regexes of one rule tier (include or
//! exclude). Globs are always tried before regexes, each in configuration order.

use super::pattern::{GlobPattern, PatternError, RegexPattern};

/// Globs and regexes making up one tier of rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    globs: Vec<GlobPattern>,
    regexes: Vec<RegexPattern>,
}

/// The pattern that matched a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternMatch<'a> {
    /// A glob matched the whole path
    Glob(&'a GlobPattern),
    /// A regex matched a prefix of the path
    Regex(&'a RegexPattern),
}

impl PatternSet {
    /// Compile globs and regexes into a pattern set.
    ///
    /// Fails on the first pattern that does not compile.
    pub fn compile<G, R>(globs: &[G], regexes: &[R]) -> Result<Self, PatternError>
    where
        G: AsRef<str>,
        R: AsRef<str>,
    {
        let globs = globs
            .iter()
            .map(|g| GlobPattern::new(g.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let regexes = regexes
            .iter()
            .map(|r| RegexPattern::new(r.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { globs, regexes })
    }

    /// Find the first pattern matching `path`: globs in order, then regexes in order
    #[must_use]
    pub fn first_match(&self, path: &str) -> Option<PatternMatch<'_>> {
        self.globs
            .iter()
            .find(|g| g.matches(path))
            .map(PatternMatch::Glob)
            .or_else(|| self.regexes.iter().find(|r| r.matches(path)).map(PatternMatch::Regex))
    }

    /// Check whether any pattern matches `path`
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.first_match(path).is_some()
    }

    /// Compiled globs, in configuration order
    #[must_use]
    pub fn globs(&self) -> &[GlobPattern] {
        &self.globs
    }

    /// Compiled regexes, in configuration order
    #[must_use]
    pub fn regexes(&self) -> &[RegexPattern] {
        &self.regexes
    }

    /// True when the set holds no patterns at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.globs.is_empty() && self.regexes.is_empty()
    }
}

impl PatternMatch<'_> {
    /// The matching pattern as written in configuration
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::Glob(g) => g.as_str(),
            Self::Regex(r) => r.as_str(),
        }
    }
}
