//! Task name table and sequential execution.

use super::{BuildContext, FailurePolicy, Task, graph};
use crate::error::{Result, TaskError};
use std::collections::BTreeMap;
use std::sync::Arc;

enum Entry {
    Atomic(Arc<dyn Task>),
    Composite {
        description: String,
        steps: Vec<String>,
    },
}

/// A step that failed under [`FailurePolicy::LogAndContinue`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub task: String,
    pub error: String,
}

/// Outcome of a run that was not aborted
#[derive(Debug, Default)]
pub struct RunReport {
    /// Atomic steps that succeeded, in order
    pub completed: Vec<String>,
    /// Atomic steps whose failure was logged and skipped
    pub failed: Vec<StepFailure>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Name to task table.
///
/// Registering a name twice replaces the earlier entry.
#[derive(Default)]
pub struct TaskRegistry {
    entries: BTreeMap<String, Entry>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an atomic task.
    pub fn register(&mut self, name: impl Into<String>, task: impl Task + 'static) {
        self.insert(name.into(), Entry::Atomic(Arc::new(task)));
    }

    /// Registers a task that runs `steps` in order, stopping at the first
    /// fail-fast failure.
    pub fn register_composite<I, S>(&mut self, name: impl Into<String>, steps: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps: Vec<String> = steps.into_iter().map(Into::into).collect();
        let description = format!(
            "Alias for {}",
            steps
                .iter()
                .map(|step| format!("\"{}\"", step))
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.insert(name.into(), Entry::Composite { description, steps });
    }

    fn insert(&mut self, name: String, entry: Entry) {
        if self.entries.insert(name.clone(), entry).is_some() {
            log::debug!("Task \"{}\" re-registered, replacing previous definition", name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names with their descriptions, sorted by name
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|(name, entry)| {
                let description = match entry {
                    Entry::Atomic(task) => task.description(),
                    Entry::Composite { description, .. } => description.as_str(),
                };
                (name.as_str(), description)
            })
            .collect()
    }

    /// Expands `name` into the atomic steps it runs, in order.
    ///
    /// Fails with [`TaskError::NotFound`] if `name` or any name it refers to
    /// is unregistered, and with [`TaskError::CyclicTask`] if composites
    /// refer to each other in a loop.
    pub fn plan(&self, name: &str) -> Result<Vec<String>> {
        let composites: BTreeMap<&str, &[String]> = self
            .entries
            .iter()
            .filter_map(|(name, entry)| match entry {
                Entry::Composite { steps, .. } => Some((name.as_str(), steps.as_slice())),
                Entry::Atomic(_) => None,
            })
            .collect();
        graph::check_acyclic(&composites)?;

        let mut plan = Vec::new();
        self.expand(name, &mut plan)?;
        Ok(plan)
    }

    fn expand(&self, name: &str, plan: &mut Vec<String>) -> Result<()> {
        match self.entries.get(name) {
            Some(Entry::Atomic(_)) => {
                plan.push(name.to_string());
                Ok(())
            }
            Some(Entry::Composite { steps, .. }) => {
                for step in steps {
                    self.expand(step, plan)?;
                }
                Ok(())
            }
            None => Err(TaskError::NotFound {
                name: name.to_string(),
            }
            .into()),
        }
    }

    fn atomic(&self, name: &str) -> Result<Arc<dyn Task>> {
        match self.entries.get(name) {
            Some(Entry::Atomic(task)) => Ok(Arc::clone(task)),
            _ => Err(TaskError::NotFound {
                name: name.to_string(),
            }
            .into()),
        }
    }

    /// Runs `name` and everything it expands to, one step at a time.
    ///
    /// A failing step with [`FailurePolicy::FailFast`] aborts the run with
    /// [`TaskError::StepFailed`]; later steps do not run and earlier steps'
    /// output is left in place. With `--force` every step is treated as
    /// [`FailurePolicy::LogAndContinue`].
    pub async fn run(&self, name: &str, ctx: &mut BuildContext) -> Result<RunReport> {
        let plan = self.plan(name)?;
        let mut report = RunReport::default();

        for step in plan {
            let task = self.atomic(&step)?;
            ctx.output.section(&format!("Running \"{}\" task", step));

            let error = match task.run(ctx).await {
                Ok(()) => {
                    report.completed.push(step);
                    continue;
                }
                Err(error) => error,
            };

            let policy = if ctx.force.user_requested() {
                FailurePolicy::LogAndContinue
            } else {
                task.policy()
            };

            match policy {
                FailurePolicy::FailFast => {
                    return Err(TaskError::StepFailed {
                        task: step,
                        source: Box::new(error),
                    }
                    .into());
                }
                FailurePolicy::LogAndContinue => {
                    log::error!("Building Documentation failed: {}", error);
                    if ctx.force.user_requested() {
                        ctx.output.warn("Used --force, continuing.");
                    }
                    report.failed.push(StepFailure {
                        task: step,
                        error: error.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}
