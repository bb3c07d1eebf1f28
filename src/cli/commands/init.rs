//! Write a starter configuration file

use std::fs;
use std::path::Path;

use docs_exclude::config::CONFIG_FILE;
use docs_exclude::output::OutputMode;

const TEMPLATE: &str = r#"# docs-exclude configuration
#
# Each pattern option takes a single string or a list of strings.
# Rules are checked in order: include-glob, include-regex, glob, regex.
# The first match decides; files matching nothing are kept.

# Drop files matching these globs (`*` also matches `/`)
glob = []

# Drop files whose path starts with a match of these regexes
regex = []

# Keep files matching these globs even if an exclude rule matches
include-glob = []

# Keep files whose path starts with a match of these regexes
include-regex = []

# Also drop files ignored by git
gitignore = false
"#;

/// Create `docs-exclude.toml` in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !force {
        if mode == OutputMode::Json {
            println!("{}", serde_json::json!({ "created": false, "path": CONFIG_FILE }));
        } else {
            println!("Already initialized ({CONFIG_FILE} exists).");
            println!("Use --force to overwrite.");
        }
        return Ok(());
    }

    fs::write(path, TEMPLATE)?;

    if mode == OutputMode::Json {
        println!("{}", serde_json::json!({ "created": true, "path": CONFIG_FILE }));
    } else {
        println!("Created {CONFIG_FILE}");
    }
    Ok(())
}
