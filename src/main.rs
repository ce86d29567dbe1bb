//! CKEditor 4 documentation builder.
//!
//! Runs a named build task (default `docs`) and exits non-zero when a
//! fail-fast step fails.

use ckeditor_docs_builder::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging; progress lines are logged at info
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            log::error!("Building Documentation failed: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
