//! Shared helpers: a recording tool runner and scratch project trees.

#![allow(dead_code)]

use async_trait::async_trait;
use ckeditor_docs_builder::cli::OutputManager;
use ckeditor_docs_builder::config::BuilderConfig;
use ckeditor_docs_builder::options::BuildOptions;
use ckeditor_docs_builder::tasks::BuildContext;
use ckeditor_docs_builder::tools::{Invocation, ToolRunner};
use ckeditor_docs_builder::{BuilderError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Records every invocation instead of running it.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Invocation>>,
    failing: HashSet<String>,
}

impl RecordingRunner {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Runner whose invocations with these labels fail
    pub fn failing(labels: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            failing: labels.iter().map(|l| l.to_string()).collect(),
        })
    }

    pub fn labels(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.label.clone())
            .collect()
    }

    pub fn call(&self, label: &str) -> Option<Invocation> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.label == label)
            .cloned()
    }
}

#[async_trait]
impl ToolRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> Result<()> {
        self.calls.lock().unwrap().push(invocation.clone());
        if self.failing.contains(&invocation.label) {
            return Err(BuilderError::Tool {
                tool: invocation.label.clone(),
                reason: "exited with code 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Documentation project with package.json, scayturls.json and extracted data.
pub fn scratch_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "package.json", r#"{ "name": "ckeditor4-docs", "version": "4.11.4" }"#);
    write(
        dir.path(),
        "scayturls.json",
        r#"{ "scaytSrcUrl": "https://svc.webspellchecker.net/spellcheck31/lf/scayt3/ckscayt/ckscayt.js" }"#,
    );
    write(
        dir.path(),
        "docs/api/data/CKEDITOR.config.json",
        r#"{ "doc": "Defaults to @@scaytSrcUrl" }"#,
    );
    dir
}

pub fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

pub fn context(root: &Path, options: BuildOptions, runner: Arc<RecordingRunner>) -> BuildContext {
    BuildContext::new(
        root.to_path_buf(),
        "4.11.4".to_string(),
        PathBuf::from("../ckeditor-dev"),
        options,
        BuilderConfig::default(),
        runner,
        OutputManager::new(false, true),
    )
}
