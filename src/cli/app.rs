//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use docs_exclude::output::OutputMode;

/// docs-exclude - Drop unwanted source files from a documentation build
#[derive(Parser, Debug)]
#[command(
    name = "docs-exclude",
    version,
    about = "Drop unwanted source files from a documentation build",
    long_about = "Filter the source files of a static documentation build.\n\n\
                  Candidate paths are read from the command line or stdin. Exclude \
                  globs and regexes drop files, include globs and regexes override \
                  them, and --gitignore also drops files git ignores."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub rules: RuleArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Where rules come from, on top of the configuration file
#[derive(Args, Debug, Default)]
pub struct RuleArgs {
    /// Configuration file (default: ./docs-exclude.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Exclude files matching this glob (repeatable)
    #[arg(long = "glob", value_name = "GLOB", global = true)]
    pub globs: Vec<String>,

    /// Exclude files whose path starts with a match of this regex (repeatable)
    #[arg(long = "regex", value_name = "REGEX", global = true)]
    pub regexes: Vec<String>,

    /// Keep files matching this glob, whatever the exclude rules say (repeatable)
    #[arg(long = "include-glob", value_name = "GLOB", global = true)]
    pub include_globs: Vec<String>,

    /// Keep files whose path starts with a match of this regex (repeatable)
    #[arg(long = "include-regex", value_name = "REGEX", global = true)]
    pub include_regexes: Vec<String>,

    /// Also drop files ignored by git
    #[arg(long, global = true)]
    pub gitignore: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter candidate paths, printing the ones that stay in the build
    Filter {
        /// Directory the candidate paths are relative to
        #[arg(short, long, default_value = ".")]
        docs_dir: PathBuf,

        /// Candidate paths (read from stdin, one per line, when omitted)
        paths: Vec<String>,
    },

    /// Show which rule decides a single path
    Explain {
        /// Directory the path is relative to
        #[arg(short, long, default_value = ".")]
        docs_dir: PathBuf,

        /// Candidate path
        path: String,
    },

    /// Write a starter docs-exclude.toml
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Filter { docs_dir, paths }) => {
            commands::filter(&cli.rules, &docs_dir, paths, output_mode)
        },
        Some(Command::Explain { docs_dir, path }) => {
            commands::explain(&cli.rules, &docs_dir, path, output_mode)
        },
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": docs_exclude::VERSION
                    })
                );
            } else {
                println!("docs-exclude v{}", docs_exclude::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": docs_exclude::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("docs-exclude v{}", docs_exclude::VERSION);
                println!("\nRun 'docs-exclude --help' for usage");
                println!("Run 'docs-exclude init' to get started");
            }
            Ok(())
        },
    }
}
