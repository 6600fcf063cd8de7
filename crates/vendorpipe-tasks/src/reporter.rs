//! Task lifecycle reporting
//!
//! Tasks never log directly; they emit events through an injected
//! [`TaskReporter`]. The default [`TracingReporter`] renders events onto
//! `tracing` with the indentation scheme the pipeline output uses.

use std::sync::Mutex;

/// Events emitted over the lifetime of a task run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    /// A task is starting execution
    Started { task: String },
    /// A task reported progress on one of its internal steps
    SubStep { task: String, message: String },
    /// A task emitted diagnostic detail
    DebugInfo { task: String, lines: Vec<String> },
    /// A task failed
    Failed { task: String, error: String },
    /// A task completed successfully
    Finished { task: String },
}

/// Trait for reporting task lifecycle progress
pub trait TaskReporter: Send + Sync {
    /// Handle a task event
    fn report(&self, event: &TaskEvent);
}

/// Reporter that renders events to tracing
#[derive(Debug, Default)]
pub struct TracingReporter;

impl TaskReporter for TracingReporter {
    fn report(&self, event: &TaskEvent) {
        match event {
            TaskEvent::Started { task } => {
                tracing::info!(task = %task, "Starting {}...", task);
            }
            TaskEvent::SubStep { task, message } => {
                tracing::info!(task = %task, "  > {}", message);
            }
            TaskEvent::DebugInfo { task, lines } => {
                tracing::debug!(task = %task, "    {}", indent_continuation(lines));
            }
            TaskEvent::Failed { task, error } => {
                tracing::error!(task = %task, "{}", error);
                tracing::error!("{} failed.", task);
            }
            TaskEvent::Finished { task } => {
                tracing::info!(task = %task, "{} finished.", task);
            }
        }
    }
}

/// Join debug lines so continuation lines keep the four-space indent
fn indent_continuation(lines: &[String]) -> String {
    lines.join("\n    ")
}

/// Reporter that collects events for later inspection (useful for testing)
#[derive(Debug, Default)]
pub struct CollectingReporter {
    events: Mutex<Vec<TaskEvent>>,
}

impl CollectingReporter {
    /// Get all collected events
    pub fn events(&self) -> Vec<TaskEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl TaskReporter for CollectingReporter {
    fn report(&self, event: &TaskEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
