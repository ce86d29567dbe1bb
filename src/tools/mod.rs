//! External tool invocations.
//!
//! The orchestrator never produces API data, HTML or bundles itself. Each of
//! those steps builds an [`Invocation`] and hands it to a [`ToolRunner`].
//!
//! - [`extractor`] - API data extraction (`ckeditor-jsduck`)
//! - [`bundler`] - framework integration bundles (`webpack`)
//! - [`site`] - site generation (`umberto`)
//! - [`examples`] - SDK example preparation script
//! - [`process`] - [`ProcessRunner`], the `tokio::process` runner
//! - [`tool_detection`] - locating programs in `node_modules/.bin` or `PATH`

pub mod bundler;
pub mod examples;
pub mod extractor;
mod process;
pub mod site;
pub mod tool_detection;

pub use process::ProcessRunner;

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;

/// One external program run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Name used in logs and errors
    pub label: String,
    pub program: String,
    pub args: Vec<String>,
    /// Working directory
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(label: impl Into<String>, program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external programs to completion.
///
/// Resolves once the program exits; `Ok` only for a successful exit.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<()>;
}
