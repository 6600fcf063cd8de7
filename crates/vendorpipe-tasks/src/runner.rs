//! Sequential task runner

use vendorpipe_core::error::Result;

use crate::reporter::TaskEvent;
use crate::task::{Task, TaskContext};

/// Outcome of a single task within a pipeline run
#[derive(Debug, Clone)]
pub struct TaskRunResult {
    /// Name of the task that ran
    pub name: String,
    /// Outcome of the run
    pub status: TaskStatus,
}

/// Task execution status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task completed successfully
    Success,
    /// Task failed
    Failed(String),
    /// Task was not run because an earlier task failed
    Skipped,
}

impl TaskStatus {
    /// Check if this status represents success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Run a single task, reporting its lifecycle
///
/// Emits `Started`, awaits the task's effect, then emits `Failed` or
/// `Finished`. The error is returned to the caller rather than swallowed;
/// the pipeline driver decides whether a failure aborts the run.
pub async fn run_task(task: &dyn Task, ctx: &TaskContext) -> Result<()> {
    ctx.reporter().report(&TaskEvent::Started {
        task: task.name().to_string(),
    });

    match task.execute(ctx).await {
        Ok(()) => {
            ctx.reporter().report(&TaskEvent::Finished {
                task: task.name().to_string(),
            });
            Ok(())
        }
        Err(e) => {
            ctx.reporter().report(&TaskEvent::Failed {
                task: task.name().to_string(),
                error: e.to_string(),
            });
            Err(e)
        }
    }
}

/// A linear sequence of vendoring tasks
///
/// Tasks run strictly one after another in registration order. By default a
/// failure stops the run and the remaining tasks are recorded as skipped;
/// `continue_on_error` restores best-effort, log-and-continue behavior.
#[derive(Default)]
pub struct Pipeline {
    tasks: Vec<Box<dyn Task>>,
    continue_on_error: bool,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a failed task stops the run
    pub fn with_continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }

    /// Append a task
    pub fn add_task(&mut self, task: impl Task + 'static) {
        self.tasks.push(Box::new(task));
    }

    /// Number of registered tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if no tasks are registered
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run all tasks in order, returning one result per task
    pub async fn run(&self, ctx: &TaskContext) -> Vec<TaskRunResult> {
        let mut results = Vec::with_capacity(self.tasks.len());
        let mut failed = false;

        for task in &self.tasks {
            if failed && !self.continue_on_error {
                results.push(TaskRunResult {
                    name: task.name().to_string(),
                    status: TaskStatus::Skipped,
                });
                continue;
            }

            let status = match run_task(task.as_ref(), ctx).await {
                Ok(()) => TaskStatus::Success,
                Err(e) => {
                    failed = true;
                    TaskStatus::Failed(e.to_string())
                }
            };

            results.push(TaskRunResult {
                name: task.name().to_string(),
                status,
            });
        }

        results
    }
}
