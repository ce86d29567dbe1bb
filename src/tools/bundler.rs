//! Framework integration bundling with webpack.

use super::Invocation;
use crate::config::{BundleTarget, BundlerConfig};
use std::path::Path;

/// Task name for a bundle target, e.g. `webpack:angular`
pub fn target_task_name(target: &BundleTarget) -> String {
    format!("webpack:{}", target.name)
}

/// Builds the webpack run for one integration target.
pub fn bundle_invocation(config: &BundlerConfig, target: &BundleTarget, root: &Path) -> Invocation {
    Invocation::new(target_task_name(target), config.command.as_str(), root)
        .arg("--config")
        .arg(target.config.display().to_string())
}
