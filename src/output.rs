//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Human output of the filter
//! result is one retained path per line, so it can feed the next build step.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CandidateFile, Decision};
use crate::core::services::FilterOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of filtering a candidate list
#[derive(Debug, Serialize)]
pub struct FilterResult {
    /// Paths that stay in the build, in input order
    pub included: Vec<String>,
    /// Paths that were dropped, with the reason
    pub excluded: Vec<ExcludedFile>,
    /// Number of candidates examined
    pub total: usize,
}

/// A dropped file and why
#[derive(Debug, Serialize)]
pub struct ExcludedFile {
    /// Relative path as given
    pub path: String,
    /// Rule that dropped it
    pub decision: Decision,
}

/// Result of explaining a single path
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    /// Relative path as given
    pub path: String,
    /// Absolute path consulted for ignore lookups
    pub absolute_path: String,
    /// Whether the file stays in the build
    pub included: bool,
    /// Rule that decided
    pub decision: Decision,
}

impl From<FilterOutcome> for FilterResult {
    fn from(outcome: FilterOutcome) -> Self {
        let total = outcome.total();
        Self {
            included: outcome.included.into_iter().map(|f| f.src_path).collect(),
            excluded: outcome
                .excluded
                .into_iter()
                .map(|(file, decision)| ExcludedFile {
                    path: file.src_path,
                    decision,
                })
                .collect(),
            total,
        }
    }
}

impl FilterResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for path in &self.included {
            println!("{path}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ExplainResult {
    /// Describe the decision for one candidate
    #[must_use]
    pub fn new(file: CandidateFile, decision: Decision) -> Self {
        Self {
            path: file.src_path,
            absolute_path: file.abs_src_path.display().to_string(),
            included: decision.is_included(),
            decision,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.included {
            println!("{} {} ({})", "include:".green(), self.path, self.decision);
        } else {
            println!("{} {} ({})", "exclude:".red(), self.path, self.decision);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
