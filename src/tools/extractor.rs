//! API data extraction with `ckeditor-jsduck`.

use super::Invocation;
use crate::config::ExtractorConfig;
use std::path::Path;

/// Builds the extractor run for an editor checkout.
///
/// Sources are the configured entries inside `source_path` followed by the
/// auxiliary plugin repositories. Options use the `--name=value` form, with
/// one `--warnings` per entry.
pub fn extractor_invocation(config: &ExtractorConfig, root: &Path, source_path: &Path) -> Invocation {
    let mut invocation = Invocation::new("api", config.command.as_str(), root)
        .arg(format!("--tags={}", config.tags));

    for warning in &config.warnings {
        invocation = invocation.arg(format!("--warnings={}", warning));
    }

    invocation = invocation.args([
        format!("--output={}", config.output.display()),
        format!("--export={}", config.export),
        format!("--external={}", config.external),
        format!("--exclude={}", source_path.join(&config.exclude).display()),
        format!("--ignore-html={}", config.ignore_html),
    ]);

    for source in &config.sources {
        invocation = invocation.arg(source_path.join(source).display().to_string());
    }

    for repo in &config.plugin_repos {
        invocation = invocation.arg(repo.display().to_string());
    }

    invocation
}
