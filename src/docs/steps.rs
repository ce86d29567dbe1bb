//! Atomic documentation build steps.

use crate::config::BundleTarget;
use crate::error::Result;
use crate::options::SiteOptions;
use crate::patch::{apply_replacements, load_replacement_map};
use crate::serve::{DocsServer, open_in_browser};
use crate::tasks::{BuildContext, FailurePolicy, Task};
use crate::tools::bundler::bundle_invocation;
use crate::tools::examples::examples_invocation;
use crate::tools::extractor::extractor_invocation;
use crate::tools::site::site_invocation;
use async_trait::async_trait;

/// Extracts API data from the editor checkout and plugin repositories.
pub struct ExtractApi;

#[async_trait]
impl Task for ExtractApi {
    fn description(&self) -> &str {
        "Extract API data with ckeditor-jsduck"
    }

    async fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        let invocation = extractor_invocation(&ctx.config.extractor, &ctx.root, &ctx.source_path);
        ctx.runner.run(&invocation).await?;
        ctx.output.success(&format!(
            "API data written to {}",
            ctx.config.extractor.output.display()
        ));
        Ok(())
    }
}

/// Replaces scayt URL markers in the extracted config docs.
pub struct FixScaytDocs;

#[async_trait]
impl Task for FixScaytDocs {
    fn description(&self) -> &str {
        "Replace scayt URL markers in the API data"
    }

    async fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        let scayt = &ctx.config.scayt;
        let mapping = load_replacement_map(&ctx.root.join(&scayt.map))?;
        let target = ctx.root.join(&scayt.target);

        let report = apply_replacements(&mapping, &scayt.marker_prefix, &target)?;
        log::info!("Replaced {} scayt markers in {}", report.replaced, target.display());

        if !report.leftover.is_empty() {
            log::warn!(
                "{} marker(s) without a replacement left in {}: {}",
                report.leftover.len(),
                target.display(),
                report.leftover.join(", ")
            );
            ctx.output.warn(&format!(
                "Unreplaced markers in {}: {}",
                scayt.target.display(),
                report.leftover.join(", ")
            ));
        }

        Ok(())
    }
}

/// Builds the SDK examples.
pub struct PrepareExamples;

#[async_trait]
impl Task for PrepareExamples {
    fn description(&self) -> &str {
        "Build the SDK examples"
    }

    async fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        let invocation = examples_invocation(&ctx.config.examples, &ctx.root);
        ctx.runner.run(&invocation).await
    }
}

/// Set option force to true.
pub struct ForceOn;

#[async_trait]
impl Task for ForceOn {
    fn description(&self) -> &str {
        "Set option force to true"
    }

    async fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        ctx.force.force_on();
        log::debug!("force: {}", ctx.force.is_set());
        Ok(())
    }
}

/// Set option force back to false.
pub struct ForceOff;

#[async_trait]
impl Task for ForceOff {
    fn description(&self) -> &str {
        "Set option force to false"
    }

    async fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        ctx.force.force_off();
        log::debug!("force: {}", ctx.force.is_set());
        Ok(())
    }
}

/// Bundles one framework integration.
///
/// With force set, a failing bundle is logged and the step still succeeds.
pub struct BundleIntegration {
    target: BundleTarget,
    description: String,
}

impl BundleIntegration {
    pub fn new(target: BundleTarget) -> Self {
        let description = format!("Bundle the {} integration with webpack", target.name);
        Self {
            target,
            description,
        }
    }

    /// Runs the bundler; `continue_on_error` turns a failure into a warning.
    pub async fn bundle(&self, ctx: &BuildContext, continue_on_error: bool) -> Result<()> {
        let invocation = bundle_invocation(&ctx.config.bundler, &self.target, &ctx.root);
        match ctx.runner.run(&invocation).await {
            Ok(()) => Ok(()),
            Err(e) if continue_on_error => {
                log::warn!("{} (continuing, force is set)", e);
                ctx.output.warn(&format!("{} failed, continuing.", invocation.label));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl Task for BundleIntegration {
    fn description(&self) -> &str {
        &self.description
    }

    async fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        let continue_on_error = ctx.force.is_set();
        self.bundle(ctx, continue_on_error).await
    }
}

/// Generates the documentation site.
///
/// A generator failure is logged and the build still completes.
pub struct GenerateSite;

#[async_trait]
impl Task for GenerateSite {
    fn description(&self) -> &str {
        "Generate the documentation site with umberto"
    }

    fn policy(&self) -> FailurePolicy {
        FailurePolicy::LogAndContinue
    }

    async fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        let options = SiteOptions::from(&ctx.options);
        let invocation = site_invocation(&ctx.config.site, &options, &ctx.root)?;
        ctx.runner.run(&invocation).await?;
        ctx.output.success("Documentation site generated");
        Ok(())
    }
}

/// Serves the generated site until Ctrl-C.
pub struct ServeSite;

#[async_trait]
impl Task for ServeSite {
    fn description(&self) -> &str {
        "Serve the generated site on port 9001"
    }

    async fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        let serve = &ctx.config.serve;
        let server = DocsServer::bind(serve.listen_addr(), &ctx.root.join(&serve.base)).await?;

        let url = serve.landing_url(&ctx.version);
        ctx.output.success(&format!("Documentation available at {}", url));
        if ctx.options.open {
            open_in_browser(&url);
        }
        ctx.output.progress("Press Ctrl-C to stop");

        server.run().await
    }
}
