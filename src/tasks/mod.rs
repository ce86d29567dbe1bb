//! Named build tasks and their sequencing.
//!
//! A task is either atomic (one [`Task`] value that runs one tool or file
//! operation) or composite (an ordered list of other task names). Composite
//! names are expanded in full before anything runs, so a bad name fails the
//! run without side effects.
//!
//! - [`context`] - [`BuildContext`], the per-run state steps read and update
//! - [`force`] - [`ForceFlag`], the scoped "continue past errors" override
//! - [`registry`] - [`TaskRegistry`], name lookup and sequential execution

mod context;
mod force;
mod graph;
mod registry;

pub use context::BuildContext;
pub use force::ForceFlag;
pub use registry::{RunReport, StepFailure, TaskRegistry};

use crate::error::Result;
use async_trait::async_trait;

/// What a failing step does to the sequence it runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the sequence; the run fails
    FailFast,
    /// Log the failure and carry on with the next step
    LogAndContinue,
}

/// An atomic unit of build work.
///
/// Completion is the returned future resolving, so every path through
/// `run` ends the step exactly once.
#[async_trait]
pub trait Task: Send + Sync {
    /// One-line description shown by `--list`
    fn description(&self) -> &str;

    fn policy(&self) -> FailurePolicy {
        FailurePolicy::FailFast
    }

    async fn run(&self, ctx: &mut BuildContext) -> Result<()>;
}
