//! Path pattern compilation and matching
//!
//! Two kinds of pattern decide whether a source file stays in a build:
//!
//! - Glob patterns: shell-style wildcards with `fnmatch` semantics. `*` also crosses
//!   `/`, `**` is nothing more than two stars, and the whole path must match.
//! - Regex patterns: regular expressions that must match at the start of the path
//!   but may leave a suffix unconsumed.
//!
//! Matching is case-sensitive for both.
//!
//! # Examples
//!
//! ```
//! use docs_exclude::core::models::{GlobPattern, RegexPattern};
//!
//! let glob = GlobPattern::new("*.tmp").unwrap();
//! assert!(glob.matches("notes.tmp"));
//! assert!(glob.matches("drafts/notes.tmp"));
//! assert!(!glob.matches("notes.md"));
//!
//! let regex = RegexPattern::new("^draft").unwrap();
//! assert!(regex.matches("draft-notes.md"));
//! assert!(!regex.matches("my-draft.md"));
//! ```

use std::fmt;
use std::fmt::Write as _;

use regex::Regex;
use thiserror::Error;

/// Errors raised while compiling patterns
#[derive(Debug, Error)]
pub enum PatternError {
    /// The glob could not be translated into a working matcher
    #[error("invalid glob pattern `{pattern}`: {reason}")]
    InvalidGlob {
        /// The offending glob
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// The regular expression does not compile
    #[error("invalid regex `{pattern}`: {source}")]
    InvalidRegex {
        /// The offending expression
        pattern: String,
        /// Underlying compile error
        #[source]
        source: regex::Error,
    },
}

/// A compiled glob pattern
#[derive(Debug, Clone)]
pub struct GlobPattern {
    /// Original pattern string
    pattern: String,

    /// Compiled regex for matching
    regex: Regex,
}

impl PartialEq for GlobPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for GlobPattern {}

impl GlobPattern {
    /// Compile a glob pattern
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Self::glob_to_regex(pattern)?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written in configuration
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Check whether the whole path matches this pattern
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Translate a glob into an anchored regex
    fn glob_to_regex(glob: &str) -> Result<Regex, PatternError> {
        let mut regex = String::with_capacity(glob.len() * 2 + 8);
        // `*` and `?` match newlines too
        regex.push_str("(?s)^");

        let chars: Vec<char> = glob.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '*' => {
                    while i + 1 < chars.len() && chars[i + 1] == '*' {
                        i += 1;
                    }
                    regex.push_str(".*");
                },
                '?' => regex.push('.'),
                '[' => match Self::translate_class(&chars[i + 1..]) {
                    Some((class, consumed)) => {
                        regex.push_str(&class);
                        i += consumed;
                    },
                    // An unterminated class is a literal bracket
                    None => regex.push_str(r"\["),
                },
                c => {
                    let mut buf = [0u8; 4];
                    regex.push_str(&regex::escape(c.encode_utf8(&mut buf)));
                },
            }
            i += 1;
        }

        regex.push('$');

        Regex::new(&regex).map_err(|e| PatternError::InvalidGlob {
            pattern: glob.to_string(),
            reason: e.to_string(),
        })
    }

    /// Translate the body of a `[...]` class.
    ///
    /// `rest` starts right after the opening bracket. Returns the regex class and the
    /// number of chars consumed including the closing bracket, or `None` when the class
    /// is never closed.
    fn translate_class(rest: &[char]) -> Option<(String, usize)> {
        let negated = rest.first() == Some(&'!');
        let mut end = usize::from(negated);
        // A `]` in first position is a member, not the terminator
        if rest.get(end) == Some(&']') {
            end += 1;
        }
        while end < rest.len() && rest[end] != ']' {
            end += 1;
        }
        if end >= rest.len() {
            return None;
        }

        let body = &rest[usize::from(negated)..end];
        let mut members = String::new();
        let mut k = 0;
        while k < body.len() {
            if k + 2 < body.len() && body[k + 1] == '-' {
                let (lo, hi) = (body[k], body[k + 2]);
                // Reversed ranges match nothing
                if lo <= hi {
                    push_class_char(&mut members, lo);
                    members.push('-');
                    push_class_char(&mut members, hi);
                }
                k += 3;
            } else {
                push_class_char(&mut members, body[k]);
                k += 1;
            }
        }

        let class = match (members.is_empty(), negated) {
            // Never matches
            (true, false) => r"\b\B".to_string(),
            (true, true) => ".".to_string(),
            (false, false) => format!("[{members}]"),
            (false, true) => format!("[^{members}]"),
        };
        Some((class, end + 1))
    }
}

/// Push a class member as a hex escape so no char is special inside the class
fn push_class_char(out: &mut String, c: char) {
    // Writing into a String cannot fail
    write!(out, "\\x{{{:X}}}", u32::from(c)).ok();
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

/// A compiled regular expression matched from the start of a path
#[derive(Debug, Clone)]
pub struct RegexPattern {
    pattern: String,
    regex: Regex,
}

impl PartialEq for RegexPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for RegexPattern {}

impl RegexPattern {
    /// Compile a regular expression
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The expression as written in configuration
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Check whether the expression matches a prefix of the path
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        // The leftmost match starts at 0 iff an anchored match exists
        self.regex.find(path).is_some_and(|m| m.start() == 0)
    }
}

impl fmt::Display for RegexPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}
