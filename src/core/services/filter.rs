//! Candidate list filtering
//!
//! Applies a [`Decider`] to every candidate the host discovered and keeps the ones
//! it includes, in their original order.

use log::{debug, info};

use crate::core::models::{CandidateFile, Decision};
use crate::core::services::Decider;

/// Files split by verdict
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Files that stay in the build, in input order
    pub included: Vec<CandidateFile>,
    /// Dropped files with the decision that dropped them, in input order
    pub excluded: Vec<(CandidateFile, Decision)>,
}

impl FilterOutcome {
    /// Number of candidates examined
    #[must_use]
    pub fn total(&self) -> usize {
        self.included.len() + self.excluded.len()
    }
}

/// Keep the candidates the decider includes
pub fn filter_files<I>(decider: &Decider, files: I) -> Vec<CandidateFile>
where
    I: IntoIterator<Item = CandidateFile>,
{
    partition_files(decider, files).included
}

/// Classify every candidate, keeping the decision for dropped files
pub fn partition_files<I>(decider: &Decider, files: I) -> FilterOutcome
where
    I: IntoIterator<Item = CandidateFile>,
{
    let mut outcome = FilterOutcome::default();

    for file in files {
        let decision = decider.explain(&file.src_path, &file.abs_src_path);
        if decision.is_included() {
            info!("include: {}", file.src_path);
            outcome.included.push(file);
        } else {
            debug!("exclude: {} ({decision})", file.src_path);
            outcome.excluded.push((file, decision));
        }
    }

    outcome
}
