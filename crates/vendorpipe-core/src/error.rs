//! Error types for vendorpipe

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using VendorpipeError
pub type Result<T> = std::result::Result<T, VendorpipeError>;

/// Main error type for vendorpipe operations
#[derive(Debug, Error)]
pub enum VendorpipeError {
    /// Path-resolution errors
    #[error(transparent)]
    Path(#[from] PathError),

    /// Task execution errors
    #[error(transparent)]
    Task(#[from] TaskError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Path-resolution errors
#[derive(Debug, Error)]
pub enum PathError {
    /// No repository root above the starting directory
    #[error("Repository root not found above {0}")]
    RepoRootNotFound(PathBuf),
}

/// Task execution errors
#[derive(Debug, Error)]
pub enum TaskError {
    /// No working directory could be resolved for a task
    #[error("No working directory resolvable for task '{task}': no override and no ambient directory set")]
    WorkingDirectoryUnresolved { task: String },
}

impl VendorpipeError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
