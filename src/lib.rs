//! Documentation build orchestrator for CKEditor 4.
//!
//! Sequences the external tools that produce the documentation site:
//! - API data extraction (`ckeditor-jsduck`)
//! - scayt URL patching of the extracted data
//! - SDK example preparation
//! - framework integration bundling (`webpack`)
//! - site generation (`umberto`) and an optional local server
//!
//! It can be used both as the `ckeditor-docs` CLI and as a library.

pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod options;
pub mod patch;
pub mod serve;
pub mod tasks;
pub mod tools;

// Re-export commonly used types
pub use error::{BuilderError, CliError, Result, TaskError};
