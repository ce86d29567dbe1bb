//! Error types for documentation build operations.
//!
//! Every failure a build can produce is one of these variants. The CLI prints
//! them as a single `Building Documentation failed: <error>` line.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Main error type for all builder operations
#[derive(Error, Debug)]
pub enum BuilderError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Task lookup and sequencing errors
    #[error(transparent)]
    Task(#[from] TaskError),

    /// An external tool exited unsuccessfully or could not be started
    #[error("{tool} failed: {reason}")]
    Tool {
        /// Tool label (e.g. "webpack:angular")
        tool: String,
        /// Exit status or captured stderr
        reason: String,
    },

    /// A file the build reads or writes was inaccessible
    #[error("{action} {}: {source}", .path.display())]
    File {
        /// What was being done with the file
        action: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

/// Task registry errors
#[derive(Error, Debug)]
pub enum TaskError {
    /// No task registered under the requested name
    #[error("Task \"{name}\" not found")]
    NotFound {
        /// Requested task name
        name: String,
    },

    /// A composite task refers back to itself
    #[error("Task \"{name}\" is part of a composite cycle")]
    CyclicTask {
        /// A task on the cycle
        name: String,
    },

    /// A fail-fast step failed and the sequence was aborted
    #[error("Task \"{task}\" failed: {source}")]
    StepFailed {
        /// Name of the failing step
        task: String,
        /// Underlying failure
        source: Box<BuilderError>,
    },
}

impl BuilderError {
    /// Wraps an IO error with the file it concerns.
    pub fn file(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            action,
            path: path.into(),
            source,
        }
    }

    /// Check whether the error came from a task name that does not exist
    pub fn is_task_not_found(&self) -> bool {
        matches!(self, Self::Task(TaskError::NotFound { .. }))
    }
}
