//! Filter a candidate list

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::Context;
use docs_exclude::core::models::CandidateFile;
use docs_exclude::core::services::partition_files;
use docs_exclude::output::{FilterResult, OutputMode};

use super::{absolute_docs_dir, resolve_config};
use crate::cli::app::RuleArgs;

/// Print the candidates that stay in the build
pub fn filter(
    rules: &RuleArgs,
    docs_dir: &Path,
    paths: Vec<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    // Configuration errors surface before any candidate is read
    let config = resolve_config(rules)?;
    let docs_dir = absolute_docs_dir(docs_dir)?;
    let decider = config.decider(&docs_dir)?;

    let paths = if paths.is_empty() { read_paths(io::stdin().lock())? } else { paths };
    let candidates: Vec<_> =
        paths.into_iter().map(|p| CandidateFile::under(&docs_dir, p)).collect();

    let outcome = partition_files(&decider, candidates);
    log::debug!(
        "kept {} of {} file(s)",
        outcome.included.len(),
        outcome.total()
    );

    FilterResult::from(outcome).render(mode);
    Ok(())
}

/// Read one candidate path per line, skipping blank lines
fn read_paths(reader: impl BufRead) -> anyhow::Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read candidate paths from stdin")?;
        let path = line.trim_end_matches('\r');
        if !path.trim().is_empty() {
            paths.push(path.to_string());
        }
    }
    Ok(paths)
}
