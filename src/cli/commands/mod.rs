//! Command implementations

mod explain;
mod filter;
mod init;

use std::path::{Path, PathBuf};

use anyhow::Context;
use docs_exclude::config::ExcludeConfig;

use super::app::RuleArgs;

pub use explain::explain;
pub use filter::filter;
pub use init::init;

/// Resolve configuration: the file first, then rules given as flags
fn resolve_config(rules: &RuleArgs) -> anyhow::Result<ExcludeConfig> {
    let mut config = match &rules.config {
        Some(path) => ExcludeConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ExcludeConfig::discover(&std::env::current_dir()?)?,
    };

    config.glob.extend(rules.globs.iter().cloned());
    config.regex.extend(rules.regexes.iter().cloned());
    config.include_glob.extend(rules.include_globs.iter().cloned());
    config.include_regex.extend(rules.include_regexes.iter().cloned());
    config.gitignore |= rules.gitignore;

    log::debug!("resolved configuration: {config:?}");
    Ok(config)
}

/// Make `docs_dir` absolute so candidates carry absolute paths
fn absolute_docs_dir(docs_dir: &Path) -> anyhow::Result<PathBuf> {
    if docs_dir.is_absolute() {
        Ok(docs_dir.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(docs_dir))
    }
}
