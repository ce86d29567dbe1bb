//! Build options taken from the command line.

use crate::cli::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Flags for one build run. Read-only once the run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub skip_api: bool,
    pub skip_validation: bool,
    pub dev: bool,
    pub clean: bool,
    /// On unless disabled with `--seo false`
    pub seo: bool,
    /// User asked to continue past failures
    pub force: bool,
    /// Open the browser once the site is served
    pub open: bool,
    /// Explicit editor source directory
    pub path: Option<PathBuf>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            skip_api: false,
            skip_validation: false,
            dev: false,
            clean: false,
            seo: true,
            force: false,
            open: false,
            path: None,
        }
    }
}

impl From<&Args> for BuildOptions {
    fn from(args: &Args) -> Self {
        Self {
            skip_api: args.skip_api,
            skip_validation: args.skip_validation,
            dev: args.dev,
            clean: args.clean,
            seo: args.seo,
            force: args.force,
            open: args.open,
            path: args.path.clone(),
        }
    }
}

/// Options object handed to the site generator's `buildSingleProject`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteOptions {
    pub skip_api: bool,
    pub skip_validation: bool,
    pub dev: bool,
    pub clean: bool,
    pub seo: bool,
}

impl From<&BuildOptions> for SiteOptions {
    fn from(options: &BuildOptions) -> Self {
        Self {
            skip_api: options.skip_api,
            skip_validation: options.skip_validation,
            dev: options.dev,
            clean: options.clean,
            seo: options.seo,
        }
    }
}
