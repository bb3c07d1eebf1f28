//! Filter configuration
//!
//! The options mirror a documentation build's plugin block:
//!
//! ```toml
//! glob = ["*.tmp", "drafts/*"]
//! regex = '.*\.(bak|swp)$'
//! include-glob = "drafts/published/*"
//! include-regex = []
//! gitignore = true
//! ```
//!
//! Each pattern option may be absent, a single string, or a list of strings.
//! Unknown keys are rejected before any file is looked at.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::git::GitIgnoreOracle;
use crate::core::models::{PatternError, PatternSet};
use crate::core::services::Decider;

/// Configuration filename looked up in the working directory
pub const CONFIG_FILE: &str = "docs-exclude.toml";

/// Every key the filter understands
pub const KNOWN_KEYS: [&str; 5] = ["glob", "regex", "include-glob", "include-regex", "gitignore"];

/// Errors raised while resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A key the filter does not know about
    #[error("configuration '{0}' not found for exclude filter")]
    UnknownKey(String),

    /// A known key with a value of the wrong shape
    #[error("invalid configuration: {0}")]
    InvalidValue(String),

    /// The configuration text is not valid TOML
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A configured pattern does not compile
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// One pattern option: nothing, a single pattern, or a list
///
/// An empty string is read as an absent option, not as a pattern that matches
/// every path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPatternConfig")]
pub enum PatternConfig {
    /// Option absent
    #[default]
    Empty,
    /// A single pattern, treated as a one-element list
    Single(String),
    /// A list of patterns
    Many(Vec<String>),
}

/// Pattern option as written in the file
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPatternConfig {
    Single(String),
    Many(Vec<String>),
}

impl From<RawPatternConfig> for PatternConfig {
    fn from(raw: RawPatternConfig) -> Self {
        match raw {
            RawPatternConfig::Single(pattern) => Self::from(pattern.as_str()),
            RawPatternConfig::Many(patterns) => Self::from(patterns),
        }
    }
}

impl PatternConfig {
    /// The patterns as a plain ordered slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Empty => &[],
            Self::Single(pattern) => std::slice::from_ref(pattern),
            Self::Many(patterns) => patterns,
        }
    }

    /// Append patterns after the configured ones
    pub fn extend<I>(&mut self, more: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut patterns = std::mem::take(self).into_vec();
        patterns.extend(more);
        *self = Self::from(patterns);
    }

    /// Convert into an owned list
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(pattern) => vec![pattern],
            Self::Many(patterns) => patterns,
        }
    }
}

impl From<Vec<String>> for PatternConfig {
    fn from(patterns: Vec<String>) -> Self {
        if patterns.is_empty() { Self::Empty } else { Self::Many(patterns) }
    }
}

impl From<&str> for PatternConfig {
    fn from(pattern: &str) -> Self {
        if pattern.is_empty() { Self::Empty } else { Self::Single(pattern.to_string()) }
    }
}

/// Resolved filter options
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExcludeConfig {
    /// Exclude globs
    #[serde(default)]
    pub glob: PatternConfig,

    /// Exclude regexes
    #[serde(default)]
    pub regex: PatternConfig,

    /// Include globs, overriding every exclude rule
    #[serde(default)]
    pub include_glob: PatternConfig,

    /// Include regexes, overriding every exclude rule
    #[serde(default)]
    pub include_regex: PatternConfig,

    /// Also drop files git ignores
    #[serde(default)]
    pub gitignore: bool,
}

impl ExcludeConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(content)?;
        Self::from_table(table)
    }

    /// Resolve configuration from an already-parsed table
    pub fn from_table(table: toml::Table) -> Result<Self, ConfigError> {
        if let Some(key) = table.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            return Err(ConfigError::UnknownKey(key.clone()));
        }

        toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::InvalidValue(e.to_string()))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `docs-exclude.toml` from `dir`, or use defaults when it does not exist
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() { Self::load(&path) } else { Ok(Self::default()) }
    }

    /// Compile the include tier
    pub fn include_patterns(&self) -> Result<PatternSet, PatternError> {
        PatternSet::compile(self.include_glob.as_slice(), self.include_regex.as_slice())
    }

    /// Compile the exclude tier
    pub fn exclude_patterns(&self) -> Result<PatternSet, PatternError> {
        PatternSet::compile(self.glob.as_slice(), self.regex.as_slice())
    }

    /// Build a decider, attaching a git oracle rooted at `workdir` when `gitignore` is set
    pub fn decider(&self, workdir: &Path) -> Result<Decider, ConfigError> {
        let decider = Decider::new(self.include_patterns()?, self.exclude_patterns()?);
        if self.gitignore {
            Ok(decider.with_ignore_oracle(GitIgnoreOracle::new(workdir.to_path_buf())))
        } else {
            Ok(decider)
        }
    }
}
