//! The documentation build: task registrations for every entry point.
//!
//! | task | runs |
//! |------|------|
//! | `api` | API data extraction |
//! | `fix-scayt-docs` | scayt URL substitution in the extracted data |
//! | `prepare-examples` | SDK example build script |
//! | `build-integrations` | `force-on`, one `webpack:<target>` per bundle target, `force-off` |
//! | `site` | site generation |
//! | `serve` | static server for the generated site |
//! | `docs` | `api`, `fix-scayt-docs`, `prepare-examples`, `build-integrations`, `site` |
//! | `docs-serve` | `docs`, then `serve` |

mod steps;

pub use steps::{
    BundleIntegration, ExtractApi, FixScaytDocs, ForceOff, ForceOn, GenerateSite, PrepareExamples,
    ServeSite,
};

use crate::config::BuilderConfig;
use crate::tasks::TaskRegistry;
use crate::tools::bundler::target_task_name;

/// Builds the registry of documentation tasks for a configuration.
pub fn build_registry(config: &BuilderConfig) -> TaskRegistry {
    let mut registry = TaskRegistry::new();

    registry.register("api", ExtractApi);
    registry.register("fix-scayt-docs", FixScaytDocs);
    registry.register("prepare-examples", PrepareExamples);
    registry.register("force-on", ForceOn);
    registry.register("force-off", ForceOff);
    registry.register("site", GenerateSite);
    registry.register("serve", ServeSite);

    let mut integrations = vec!["force-on".to_string()];
    for target in &config.bundler.targets {
        let name = target_task_name(target);
        registry.register(name.clone(), BundleIntegration::new(target.clone()));
        integrations.push(name);
    }
    integrations.push("force-off".to_string());
    registry.register_composite("build-integrations", integrations);

    registry.register_composite(
        "docs",
        [
            "api",
            "fix-scayt-docs",
            "prepare-examples",
            "build-integrations",
            "site",
        ],
    );
    registry.register_composite("docs-serve", ["docs", "serve"]);

    registry
}
