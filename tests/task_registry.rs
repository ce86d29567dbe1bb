//! Task lookup, composite expansion and failure policies.

mod common;

use async_trait::async_trait;
use ckeditor_docs_builder::options::BuildOptions;
use ckeditor_docs_builder::tasks::{BuildContext, FailurePolicy, Task, TaskRegistry};
use ckeditor_docs_builder::{BuilderError, Result, TaskError};
use common::{RecordingRunner, context};
use std::sync::{Arc, Mutex};

/// Appends its name to a shared log and optionally fails.
struct Probe {
    name: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
    fail: bool,
    policy: FailurePolicy,
}

impl Probe {
    fn ok(name: &'static str, log: &Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self {
            name,
            log: Arc::clone(log),
            fail: false,
            policy: FailurePolicy::FailFast,
        }
    }

    fn failing(name: &'static str, log: &Arc<Mutex<Vec<&'static str>>>, policy: FailurePolicy) -> Self {
        Self {
            fail: true,
            policy,
            ..Self::ok(name, log)
        }
    }
}

#[async_trait]
impl Task for Probe {
    fn description(&self) -> &str {
        self.name
    }

    fn policy(&self) -> FailurePolicy {
        self.policy
    }

    async fn run(&self, _ctx: &mut BuildContext) -> Result<()> {
        self.log.lock().unwrap().push(self.name);
        if self.fail {
            return Err(BuilderError::Tool {
                tool: self.name.to_string(),
                reason: "boom".to_string(),
            });
        }
        Ok(())
    }
}

fn new_log() -> Arc<Mutex<Vec<&'static str>>> {
    Arc::new(Mutex::new(Vec::new()))
}

fn ctx() -> (tempfile::TempDir, BuildContext) {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path(), BuildOptions::default(), RecordingRunner::new());
    (dir, ctx)
}

#[tokio::test]
async fn fail_fast_step_aborts_composite_and_skips_the_rest() {
    let log = new_log();
    let mut registry = TaskRegistry::new();
    registry.register("one", Probe::ok("one", &log));
    registry.register("two", Probe::failing("two", &log, FailurePolicy::FailFast));
    registry.register("three", Probe::ok("three", &log));
    registry.register_composite("all", ["one", "two", "three"]);

    let (_dir, mut ctx) = ctx();
    let err = registry.run("all", &mut ctx).await.unwrap_err();

    assert!(matches!(
        err,
        BuilderError::Task(TaskError::StepFailed { ref task, .. }) if task == "two"
    ));
    assert_eq!(*log.lock().unwrap(), ["one", "two"]);
}

#[tokio::test]
async fn log_and_continue_step_lets_composite_complete() {
    let log = new_log();
    let mut registry = TaskRegistry::new();
    registry.register("one", Probe::ok("one", &log));
    registry.register("two", Probe::failing("two", &log, FailurePolicy::LogAndContinue));
    registry.register("three", Probe::ok("three", &log));
    registry.register_composite("all", ["one", "two", "three"]);

    let (_dir, mut ctx) = ctx();
    let report = registry.run("all", &mut ctx).await.unwrap();

    assert_eq!(*log.lock().unwrap(), ["one", "two", "three"]);
    assert_eq!(report.completed, ["one", "three"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].task, "two");
    assert!(!report.is_clean());
}

#[tokio::test]
async fn user_force_continues_past_fail_fast_steps() {
    let log = new_log();
    let mut registry = TaskRegistry::new();
    registry.register("one", Probe::failing("one", &log, FailurePolicy::FailFast));
    registry.register("two", Probe::ok("two", &log));
    registry.register_composite("all", ["one", "two"]);

    let dir = tempfile::tempdir().unwrap();
    let options = BuildOptions {
        force: true,
        ..BuildOptions::default()
    };
    let mut ctx = context(dir.path(), options, RecordingRunner::new());
    let report = registry.run("all", &mut ctx).await.unwrap();

    assert_eq!(*log.lock().unwrap(), ["one", "two"]);
    assert_eq!(report.completed, ["two"]);
}

#[tokio::test]
async fn unknown_task_is_not_found_without_side_effects() {
    let log = new_log();
    let mut registry = TaskRegistry::new();
    registry.register("one", Probe::ok("one", &log));

    let (_dir, mut ctx) = ctx();
    let err = registry.run("nonexistent-task", &mut ctx).await.unwrap_err();

    assert!(err.is_task_not_found());
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_step_inside_composite_fails_before_anything_runs() {
    let log = new_log();
    let mut registry = TaskRegistry::new();
    registry.register("one", Probe::ok("one", &log));
    registry.register_composite("all", ["one", "missing"]);

    let (_dir, mut ctx) = ctx();
    let err = registry.run("all", &mut ctx).await.unwrap_err();

    assert!(matches!(
        err,
        BuilderError::Task(TaskError::NotFound { ref name }) if name == "missing"
    ));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn nested_composites_expand_in_order() {
    let log = new_log();
    let mut registry = TaskRegistry::new();
    for name in ["a", "b", "c"] {
        registry.register(name, Probe::ok(name, &log));
    }
    registry.register_composite("inner", ["b", "c"]);
    registry.register_composite("outer", ["a", "inner", "a"]);

    assert_eq!(registry.plan("outer").unwrap(), ["a", "b", "c", "a"]);
}

#[test]
fn composite_cycles_are_rejected() {
    let mut registry = TaskRegistry::new();
    registry.register_composite("ping", ["pong"]);
    registry.register_composite("pong", ["ping"]);

    assert!(matches!(
        registry.plan("ping").unwrap_err(),
        BuilderError::Task(TaskError::CyclicTask { .. })
    ));
}

#[test]
fn re_registering_a_name_replaces_it() {
    let log = new_log();
    let mut registry = TaskRegistry::new();
    registry.register("step", Probe::ok("first", &log));
    registry.register("step", Probe::ok("second", &log));

    assert_eq!(registry.list(), [("step", "second")]);
}
