//! Command line argument parsing and validation.
//!
//! Flag names follow the documentation team's existing invocations
//! (`--skipApi`, `--seo false`), with kebab-case aliases.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Default task when none is given on the command line
pub const DEFAULT_TASK: &str = "docs";

/// CKEditor 4 documentation builder
#[derive(Parser, Debug)]
#[command(
    name = "ckeditor-docs",
    version,
    about = "Builds the CKEditor 4 documentation site",
    long_about = "Runs the documentation build tasks: API extraction, scayt URL patching,
SDK example preparation, integration bundling and site generation.

Usage:
  ckeditor-docs                      # full build (\"docs\")
  ckeditor-docs docs-serve --dev     # build and serve on http://localhost:9001
  ckeditor-docs api --path ../ckeditor-dev
  ckeditor-docs --list

The editor source directory is taken from --path, then the CKEDITOR_DEV
environment variable, then ../ckeditor-dev, then repos/ckeditor-presets/ckeditor."
)]
pub struct Args {
    /// Task to run (see --list)
    #[arg(value_name = "TASK", default_value = DEFAULT_TASK)]
    pub task: String,

    /// Editor source directory, overriding the lookup chain
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Skip API docs generation in the site generator
    #[arg(long = "skipApi", visible_alias = "skip-api")]
    pub skip_api: bool,

    /// Skip link validation in the site generator
    #[arg(long = "skipValidation", visible_alias = "skip-validation")]
    pub skip_validation: bool,

    /// Development build of the site
    #[arg(long)]
    pub dev: bool,

    /// Clean the output directory before generating
    #[arg(long)]
    pub clean: bool,

    /// Emit SEO metadata (pass `--seo false` to disable)
    #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    pub seo: bool,

    /// Open the served site in the default browser (docs-serve)
    #[arg(long)]
    pub open: bool,

    /// Continue past failing steps
    #[arg(long)]
    pub force: bool,

    /// Documentation project root
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// TOML file overriding tool commands and fixed paths
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print registered tasks and exit
    #[arg(long)]
    pub list: bool,

    /// Print tool output while it runs
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.task.trim().is_empty() {
            return Err("Task name cannot be empty".to_string());
        }

        if self
            .path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err("--path cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}
