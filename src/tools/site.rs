//! Site generation with umberto.
//!
//! umberto is a node library, not a CLI. The generator is driven through a
//! short inline node script that calls `buildSingleProject` with the options
//! serialized as JSON and maps promise rejection to a non-zero exit.

use super::Invocation;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::options::SiteOptions;
use std::path::Path;

/// Inline driver; reads the options JSON from the first script argument.
const DRIVER: &str = "const [, moduleName, options] = process.argv;\
require(moduleName).buildSingleProject(JSON.parse(options))\
.then(() => process.exit(0), err => { console.error(String(err)); process.exit(1); });";

/// Builds the site generator run.
pub fn site_invocation(config: &SiteConfig, options: &SiteOptions, root: &Path) -> Result<Invocation> {
    Ok(Invocation::new("site", config.node.as_str(), root)
        .arg("-e")
        .arg(DRIVER)
        .arg(config.module.as_str())
        .arg(serde_json::to_string(options)?))
}
