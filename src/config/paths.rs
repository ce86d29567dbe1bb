//! Editor source directory resolution.
//!
//! Lookup order: the development checkout named by the environment variable,
//! the conventional sibling checkout if its marker file exists, then the
//! configured default. A miss is never an error; the default is returned even
//! when it does not exist, and the extractor reports the problem.

use super::SourceConfig;
use std::path::{Path, PathBuf};

/// Resolves the editor checkout whose API gets documented
pub struct PathResolver<'a> {
    root: &'a Path,
    config: &'a SourceConfig,
    version: &'a str,
}

impl<'a> PathResolver<'a> {
    /// # Arguments
    ///
    /// * `root` - Documentation project root; the sibling lookup is relative to it
    /// * `config` - Lookup candidates
    /// * `version` - Package version, printed in the banner
    pub fn new(root: &'a Path, config: &'a SourceConfig, version: &'a str) -> Self {
        Self {
            root,
            config,
            version,
        }
    }

    /// Resolves using the process environment.
    pub fn resolve_source_path(&self) -> PathBuf {
        self.resolve_with_env(std::env::var(&self.config.env_var).ok())
    }

    /// Resolves with an explicit value for the environment variable.
    ///
    /// An empty value counts as unset.
    pub fn resolve_with_env(&self, env_value: Option<String>) -> PathBuf {
        log::info!("CKEditor Documentation Builder v{}.", self.version);

        let path = match env_value.filter(|value| !value.is_empty()) {
            Some(value) => {
                log::info!(
                    "[i] Using CKEditor directory from {} env variable.",
                    self.config.env_var
                );
                PathBuf::from(value)
            }
            None => {
                log::info!(
                    "[i] {} env variable not set. Looking for {}...",
                    self.config.env_var,
                    self.config.sibling.display()
                );

                let marker = self.root.join(&self.config.sibling).join(&self.config.marker);
                if marker.is_file() {
                    log::info!("[i] Directory {} found!", self.config.sibling.display());
                    self.config.sibling.clone()
                } else {
                    log::info!("[i] CKEditor directory not found.");
                    self.config.default.clone()
                }
            }
        };

        log::info!("[i] Using {} as source directory.", path.display());
        path
    }
}
