//! Command line interface for the documentation builder.
//!
//! Parses arguments, loads configuration, resolves the editor source
//! directory and runs the requested task.

mod args;
mod output;

pub use args::{Args, DEFAULT_TASK, RuntimeConfig};
pub use output::OutputManager;

use crate::config::{BuilderConfig, PathResolver, load_package_version};
use crate::docs::build_registry;
use crate::error::{BuilderError, CliError, Result};
use crate::options::BuildOptions;
use crate::tasks::BuildContext;
use crate::tools::ProcessRunner;
use path_absolutize::Absolutize;
use std::sync::Arc;

/// Main CLI entry point; returns the process exit code.
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(args).await
}

/// Runs parsed arguments.
pub async fn execute(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| BuilderError::Cli(CliError::InvalidArguments { reason }))?;

    let runtime = RuntimeConfig::from(&args);
    let output = *runtime.output();

    let root = args.root.absolutize()?.into_owned();
    let config = BuilderConfig::load(&root, args.config.as_deref())?;
    let registry = build_registry(&config);

    if args.list {
        for (name, description) in registry.list() {
            println!("{:<20} {}", name, description);
        }
        return Ok(0);
    }

    // Unknown task names fail before anything is read or run
    registry.plan(&args.task)?;

    let version = load_package_version(&root)?;
    let options = BuildOptions::from(&args);
    let source_path = match &options.path {
        Some(path) => {
            log::info!("[i] Using {} as source directory (--path).", path.display());
            path.clone()
        }
        None => PathResolver::new(&root, &config.source, &version).resolve_source_path(),
    };

    let runner = Arc::new(ProcessRunner::new(output));
    let mut ctx = BuildContext::new(root, version, source_path, options, config, runner, output);

    let report = registry.run(&args.task, &mut ctx).await?;

    if report.is_clean() {
        output.success(&format!("Done: \"{}\" ({} steps)", args.task, report.completed.len()));
    } else {
        let failed: Vec<&str> = report.failed.iter().map(|f| f.task.as_str()).collect();
        output.warn(&format!(
            "Done with errors: \"{}\" ({} completed, failed: {})",
            args.task,
            report.completed.len(),
            failed.join(", ")
        ));
    }

    Ok(0)
}
