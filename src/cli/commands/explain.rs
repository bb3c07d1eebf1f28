//! Explain the decision for one path

use std::path::Path;

use docs_exclude::core::models::CandidateFile;
use docs_exclude::output::{ExplainResult, OutputMode};

use super::{absolute_docs_dir, resolve_config};
use crate::cli::app::RuleArgs;

/// Show whether a path stays in the build and which rule decided
pub fn explain(
    rules: &RuleArgs,
    docs_dir: &Path,
    path: String,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = resolve_config(rules)?;
    let docs_dir = absolute_docs_dir(docs_dir)?;
    let decider = config.decider(&docs_dir)?;

    let file = CandidateFile::under(&docs_dir, path);
    let decision = decider.explain(&file.src_path, &file.abs_src_path);

    ExplainResult::new(file, decision).render(mode);
    Ok(())
}
