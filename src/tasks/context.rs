//! Per-run build state.

use super::ForceFlag;
use crate::cli::OutputManager;
use crate::config::BuilderConfig;
use crate::options::BuildOptions;
use crate::tools::ToolRunner;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a step needs: resolved paths, options and the tool runner.
///
/// Steps run one at a time and get exclusive access; only the force flag
/// changes during a run.
pub struct BuildContext {
    /// Documentation project root; tools run here
    pub root: PathBuf,
    /// Package version from package.json
    pub version: String,
    /// Editor checkout whose API is extracted
    pub source_path: PathBuf,
    pub options: BuildOptions,
    pub config: BuilderConfig,
    pub force: ForceFlag,
    pub runner: Arc<dyn ToolRunner>,
    pub output: OutputManager,
}

impl BuildContext {
    pub fn new(
        root: PathBuf,
        version: String,
        source_path: PathBuf,
        options: BuildOptions,
        config: BuilderConfig,
        runner: Arc<dyn ToolRunner>,
        output: OutputManager,
    ) -> Self {
        let force = ForceFlag::new(options.force);
        Self {
            root,
            version,
            source_path,
            options,
            config,
            force,
            runner,
            output,
        }
    }
}
