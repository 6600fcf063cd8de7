//! Vendorpipe Tasks - Sequential vendoring steps
//!
//! This crate provides the task contract used by the vendoring pipeline:
//! named steps with lifecycle reporting and working-directory resolution,
//! run one at a time by a sequential pipeline driver.

pub mod remove_directory;
pub mod reporter;
pub mod runner;
pub mod task;

pub use remove_directory::{RemoveDirectory, RemoveDirectorySettings};
pub use reporter::{CollectingReporter, TaskEvent, TaskReporter, TracingReporter};
pub use runner::{run_task, Pipeline, TaskRunResult, TaskStatus};
pub use task::{Task, TaskContext};
