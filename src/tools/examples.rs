//! SDK example preparation.

use super::Invocation;
use crate::config::ExamplesConfig;
use std::path::Path;

/// Runs the SDK build script with node from the project root.
pub fn examples_invocation(config: &ExamplesConfig, root: &Path) -> Invocation {
    Invocation::new("prepare-examples", config.node.as_str(), root)
        .arg(config.script.display().to_string())
}
