//! Task contract and execution context

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use vendorpipe_core::error::{Result, TaskError};
use vendorpipe_core::paths::RepoRoot;

use crate::reporter::{TaskEvent, TaskReporter, TracingReporter};

/// A named, independently-executable vendoring step
///
/// Implementations supply the task's effect in [`Task::execute`]; lifecycle
/// reporting and working-directory resolution come from [`TaskContext`] and
/// the run wrapper in [`crate::runner`].
#[async_trait]
pub trait Task: Send + Sync {
    /// Task name used for all reported events
    fn name(&self) -> &str;

    /// Per-task working-directory override
    ///
    /// Returning a path redirects this task to that directory instead of the
    /// pipeline's ambient working directory. The default is no override.
    fn working_directory_override(&self) -> Option<&Path> {
        None
    }

    /// The body of the task; invoked once by [`crate::runner::run_task`]
    async fn execute(&self, ctx: &TaskContext) -> Result<()>;
}

/// Shared context for a pipeline run
///
/// Holds the repository root, the ambient working directory assigned by the
/// pipeline driver, and the reporter tasks emit their lifecycle events to.
#[derive(Clone)]
pub struct TaskContext {
    repo_root: RepoRoot,
    working_directory: Option<PathBuf>,
    reporter: Arc<dyn TaskReporter>,
}

impl TaskContext {
    /// Create a context rooted at the given repository
    pub fn new(repo_root: RepoRoot) -> Self {
        Self {
            repo_root,
            working_directory: None,
            reporter: Arc::new(TracingReporter),
        }
    }

    /// Set the ambient working directory
    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    /// Replace the reporter
    pub fn with_reporter(mut self, reporter: Arc<dyn TaskReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Reassign the ambient working directory between tasks
    pub fn set_working_directory(&mut self, dir: impl Into<PathBuf>) {
        self.working_directory = Some(dir.into());
    }

    /// Get the repository root
    pub fn repo_root(&self) -> &RepoRoot {
        &self.repo_root
    }

    /// Get the reporter
    pub fn reporter(&self) -> &dyn TaskReporter {
        &*self.reporter
    }

    /// Resolve the absolute working directory for a task
    ///
    /// The task's override wins; otherwise the ambient working directory is
    /// used. Either is resolved against the repository root. Fails when
    /// neither exists — that is a wiring bug in the pipeline, not a
    /// recoverable condition.
    pub fn working_directory_for(&self, task: &dyn Task) -> Result<PathBuf> {
        if let Some(path) = task.working_directory_override() {
            return Ok(self.repo_root.resolve(path));
        }

        match &self.working_directory {
            Some(path) => Ok(self.repo_root.resolve(path)),
            None => Err(TaskError::WorkingDirectoryUnresolved {
                task: task.name().to_string(),
            }
            .into()),
        }
    }

    /// Report progress on one of the task's internal steps
    pub fn sub_step(&self, task: &dyn Task, message: impl Into<String>) {
        self.reporter.report(&TaskEvent::SubStep {
            task: task.name().to_string(),
            message: message.into(),
        });
    }

    /// Report diagnostic detail; multiple lines are rendered with a
    /// consistent indent
    pub fn debug_info<I, S>(&self, task: &dyn Task, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reporter.report(&TaskEvent::DebugInfo {
            task: task.name().to_string(),
            lines: lines.into_iter().map(Into::into).collect(),
        });
    }
}
