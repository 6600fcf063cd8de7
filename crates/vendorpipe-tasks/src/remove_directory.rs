//! Task that removes its working directory

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use vendorpipe_core::error::Result;

use crate::task::{Task, TaskContext};

/// Settings for [`RemoveDirectory`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveDirectorySettings {
    /// Directory to remove instead of the pipeline's ambient working
    /// directory; absolute or repo-relative
    #[serde(default)]
    pub target: Option<PathBuf>,

    /// Display name for log lines; defaults to "remove"
    #[serde(default)]
    pub name: Option<String>,
}

/// A task which removes the resolved working directory and everything under
/// it
///
/// With a `target` set, that path is removed regardless of the ambient
/// working directory. Removing a path that does not exist is a success, so
/// the task can clean directories that were never created.
pub struct RemoveDirectory {
    name: String,
    target: Option<PathBuf>,
}

impl RemoveDirectory {
    /// Create the task from settings
    pub fn new(settings: RemoveDirectorySettings) -> Self {
        Self {
            name: settings.name.unwrap_or_else(|| "remove".to_string()),
            target: settings.target,
        }
    }
}

#[async_trait]
impl Task for RemoveDirectory {
    fn name(&self) -> &str {
        &self.name
    }

    fn working_directory_override(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    async fn execute(&self, ctx: &TaskContext) -> Result<()> {
        let work_directory = ctx.working_directory_for(self)?;

        ctx.sub_step(self, format!("remove {}", work_directory.display()));
        remove_recursively(&work_directory).await
    }
}

/// Delete a path and all descendants; missing paths are not an error
async fn remove_recursively(path: &Path) -> Result<()> {
    let metadata = match tokio::fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    if metadata.is_dir() {
        tokio::fs::remove_dir_all(path).await?;
    } else {
        // Regular file or symlink left behind by a previous run
        tokio::fs::remove_file(path).await?;
    }

    Ok(())
}
