//! Include/exclude decision engine
//!
//! Rules are checked in a fixed order and the first match wins:
//!
//! 1. include globs
//! 2. include regexes
//! 3. exclude globs
//! 4. exclude regexes
//! 5. otherwise the file is included
//!
//! An included file is then offered to the [`IgnoreOracle`], when one is attached,
//! which can still drop it. Excluded files never reach the oracle.
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//!
//! use docs_exclude::core::models::PatternSet;
//! use docs_exclude::core::services::Decider;
//!
//! let include = PatternSet::compile(&["keep/*.tmp"], &[] as &[&str]).unwrap();
//! let exclude = PatternSet::compile(&["*.tmp"], &["^draft"]).unwrap();
//! let decider = Decider::new(include, exclude);
//!
//! assert!(decider.classify("notes.md", Path::new("/docs/notes.md")));
//! assert!(!decider.classify("notes.tmp", Path::new("/docs/notes.tmp")));
//! assert!(decider.classify("keep/x.tmp", Path::new("/docs/keep/x.tmp")));
//! assert!(!decider.classify("draft-notes.md", Path::new("/docs/draft-notes.md")));
//! ```

use std::fmt;
use std::path::{MAIN_SEPARATOR, Path};

use crate::core::models::{Decision, PatternMatch, PatternSet};
use crate::core::ports::IgnoreOracle;

/// Decides per file whether it stays in the build
pub struct Decider {
    include: PatternSet,
    exclude: PatternSet,
    ignore_oracle: Option<Box<dyn IgnoreOracle>>,
    separator: char,
}

impl Decider {
    /// Create a decider from its include and exclude tiers.
    ///
    /// No ignore oracle is attached and the platform's native separator is used.
    #[must_use]
    pub const fn new(include: PatternSet, exclude: PatternSet) -> Self {
        Self {
            include,
            exclude,
            ignore_oracle: None,
            separator: MAIN_SEPARATOR,
        }
    }

    /// Consult `oracle` for files the rules would keep
    #[must_use]
    pub fn with_ignore_oracle(mut self, oracle: impl IgnoreOracle + 'static) -> Self {
        self.ignore_oracle = Some(Box::new(oracle));
        self
    }

    /// Treat `separator` as the separator discovery uses in relative paths.
    ///
    /// With anything other than `/`, paths are evaluated twice: as given and with the
    /// separator replaced by `/`.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Whether an ignore oracle is attached
    #[must_use]
    pub const fn uses_ignore_oracle(&self) -> bool {
        self.ignore_oracle.is_some()
    }

    /// Include tier
    #[must_use]
    pub const fn include(&self) -> &PatternSet {
        &self.include
    }

    /// Exclude tier
    #[must_use]
    pub const fn exclude(&self) -> &PatternSet {
        &self.exclude
    }

    /// Check whether a file stays in the build
    #[must_use]
    pub fn classify(&self, relative_path: &str, absolute_path: &Path) -> bool {
        self.explain(relative_path, absolute_path).is_included()
    }

    /// Classify a file and report which rule decided it
    #[must_use]
    pub fn explain(&self, relative_path: &str, absolute_path: &Path) -> Decision {
        let mut decision = self.decide(relative_path);
        if !decision.is_included() {
            return decision;
        }

        // Patterns are written with `/`, so the normalized form must pass as well
        if self.separator != '/' && relative_path.contains(self.separator) {
            let normalized = relative_path.replace(self.separator, "/");
            decision = self.decide(&normalized);
            if !decision.is_included() {
                return decision;
            }
        }

        if self.ignore_oracle.as_ref().is_some_and(|oracle| oracle.is_ignored(absolute_path)) {
            return Decision::IgnoredByVcs;
        }

        decision
    }

    /// Apply the pattern rules alone to one form of the path
    #[must_use]
    pub fn decide(&self, path: &str) -> Decision {
        if let Some(hit) = self.include.first_match(path) {
            return match hit {
                PatternMatch::Glob(g) => Decision::IncludedByGlob(g.to_string()),
                PatternMatch::Regex(r) => Decision::IncludedByRegex(r.to_string()),
            };
        }
        if let Some(hit) = self.exclude.first_match(path) {
            return match hit {
                PatternMatch::Glob(g) => Decision::ExcludedByGlob(g.to_string()),
                PatternMatch::Regex(r) => Decision::ExcludedByRegex(r.to_string()),
            };
        }
        Decision::Default
    }
}

impl fmt::Debug for Decider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decider")
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .field("ignore_oracle", &self.ignore_oracle.is_some())
            .field("separator", &self.separator)
            .finish()
    }
}
