//! Builder configuration.
//!
//! Every tool command and fixed project path has a built-in default matching
//! the documentation repository layout. A `docs-builder.toml` in the project
//! root (or a file passed with `--config`) may override any of them.

mod package;
mod paths;

pub use package::load_package_version;
pub use paths::PathResolver;

use crate::error::{BuilderError, CliError, Result};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// File name looked up in the project root when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "docs-builder.toml";

/// Complete builder configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    pub source: SourceConfig,
    pub extractor: ExtractorConfig,
    pub scayt: ScaytConfig,
    pub examples: ExamplesConfig,
    pub bundler: BundlerConfig,
    pub site: SiteConfig,
    pub serve: ServeConfig,
}

/// Where to look for the editor checkout whose API is documented
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Environment variable naming a development checkout
    pub env_var: String,
    /// Conventional sibling checkout, relative to the project root
    pub sibling: PathBuf,
    /// File that must exist in the sibling for it to be used
    pub marker: String,
    /// Fallback when nothing else is found
    pub default: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            env_var: "CKEDITOR_DEV".to_string(),
            sibling: PathBuf::from("../ckeditor-dev"),
            marker: "ckeditor.js".to_string(),
            default: PathBuf::from("repos/ckeditor-presets/ckeditor"),
        }
    }
}

/// API extractor (`ckeditor-jsduck`) invocation
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    pub command: String,
    /// Source entries inside the editor checkout
    pub sources: Vec<String>,
    /// Auxiliary plugin repositories, relative to the project root
    pub plugin_repos: Vec<PathBuf>,
    pub tags: String,
    pub warnings: Vec<String>,
    pub output: PathBuf,
    pub export: String,
    pub external: String,
    /// Excluded directory inside the editor checkout
    pub exclude: String,
    pub ignore_html: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            command: "ckeditor-jsduck".to_string(),
            sources: vec![
                "core".to_string(),
                "plugins".to_string(),
                "adapters".to_string(),
                "ckeditor.js".to_string(),
            ],
            plugin_repos: vec![
                PathBuf::from("repos/ckeditor-plugin-scayt"),
                PathBuf::from("repos/ckeditor-plugin-wsc"),
            ],
            tags: "source/customs.rb".to_string(),
            warnings: vec!["-nodoc".to_string(), "-image_unused".to_string()],
            output: PathBuf::from("docs/api/data"),
            export: "full".to_string(),
            external: "Blob,File,FileReader,DocumentFragment".to_string(),
            exclude: "plugins/codesnippet/lib".to_string(),
            ignore_html: "source".to_string(),
        }
    }
}

/// Scayt URL substitution pass
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaytConfig {
    /// JSON object of marker key to replacement
    pub map: PathBuf,
    /// Generated file patched in place
    pub target: PathBuf,
    pub marker_prefix: String,
}

impl Default for ScaytConfig {
    fn default() -> Self {
        Self {
            map: PathBuf::from("scayturls.json"),
            target: PathBuf::from("docs/api/data/CKEDITOR.config.json"),
            marker_prefix: "@@".to_string(),
        }
    }
}

/// SDK example preparation script
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExamplesConfig {
    pub node: String,
    pub script: PathBuf,
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        Self {
            node: "node".to_string(),
            script: PathBuf::from("scripts/buildsdk.js"),
        }
    }
}

/// Integration bundling
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundlerConfig {
    pub command: String,
    /// Bundled in order; each becomes a `webpack:<name>` task
    pub targets: Vec<BundleTarget>,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            command: "webpack".to_string(),
            targets: vec![
                BundleTarget {
                    name: "angular".to_string(),
                    config: PathBuf::from("angular/webpack.config.js"),
                },
                BundleTarget {
                    name: "react".to_string(),
                    config: PathBuf::from("react/webpack.config.js"),
                },
            ],
        }
    }
}

/// One framework integration bundle
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleTarget {
    pub name: String,
    pub config: PathBuf,
}

/// Site generator invocation
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub node: String,
    /// Node module exposing `buildSingleProject(options)`
    pub module: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            node: "node".to_string(),
            module: "umberto".to_string(),
        }
    }
}

/// Local static server for `docs-serve`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServeConfig {
    /// Listen address; all interfaces by default
    pub host: IpAddr,
    pub port: u16,
    /// Generated site directory
    pub base: PathBuf,
    /// URL segment before the version, e.g. `ckeditor4`
    pub product_path: String,
    /// Page logged as the entry point, relative to the versioned root
    pub landing_page: String,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 9001,
            base: PathBuf::from("build/docs"),
            product_path: "ckeditor4".to_string(),
            landing_page: "guide/dev_installation.html".to_string(),
        }
    }
}

impl ServeConfig {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Entry URL of the served site for a package version
    pub fn landing_url(&self, version: &str) -> String {
        format!(
            "http://localhost:{}/{}/{}/{}",
            self.port, self.product_path, version, self.landing_page
        )
    }
}

impl BuilderConfig {
    /// Loads configuration for a project root.
    ///
    /// An explicit file must exist. Without one, `docs-builder.toml` in the
    /// root is used when present, otherwise the built-in defaults.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(BuilderError::Cli(CliError::InvalidArguments {
                        reason: format!("Config file not found: {}", path.display()),
                    }));
                }
                path.to_path_buf()
            }
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
                    return Ok(Self::default());
                }
                candidate
            }
        };

        log::info!("Loading builder configuration from {}", path.display());
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| BuilderError::file("reading config", &path, e))?;
        Self::from_toml(&contents)
    }

    /// Parses a TOML document; omitted keys keep their defaults.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
