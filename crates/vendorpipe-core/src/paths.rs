//! Repository root discovery and path resolution
//!
//! Vendoring tasks address the filesystem with repo-relative paths; `RepoRoot`
//! anchors those paths to an absolute location on disk.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PathError, Result};

/// Environment variable that pins the repository root, bypassing discovery
pub const ROOT_DIR_ENV: &str = "VENDORPIPE_ROOT_DIR";

/// The root directory of the repository being vendored into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRoot {
    path: PathBuf,
}

impl RepoRoot {
    /// Wrap a known repository root
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Discover the repository root by searching parent directories for a
    /// `.git` entry
    pub fn discover(start_path: &Path) -> Result<Self> {
        let mut current = Some(start_path);

        while let Some(dir) = current {
            if dir.join(".git").exists() {
                debug!(root = %dir.display(), "discovered repository root");
                return Ok(Self::new(dir));
            }
            current = dir.parent();
        }

        Err(PathError::RepoRootNotFound(start_path.to_path_buf()).into())
    }

    /// Locate the repository root: an environment override wins, otherwise
    /// discovery starts from the current directory
    pub fn locate() -> Result<Self> {
        if let Some(dir) = std::env::var_os(ROOT_DIR_ENV) {
            return Ok(Self::new(PathBuf::from(dir)));
        }

        let cwd = std::env::current_dir()?;
        Self::discover(&cwd)
    }

    /// Get the root path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a repo-relative path to an absolute path; absolute inputs pass
    /// through unchanged
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.path.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VendorpipeError;

    #[test]
    fn test_resolve_relative_joins_root() {
        let root = RepoRoot::new("/repo");
        assert_eq!(
            root.resolve("packages/vendor-tmp"),
            PathBuf::from("/repo/packages/vendor-tmp")
        );
    }

    #[test]
    fn test_resolve_absolute_passes_through() {
        let root = RepoRoot::new("/repo");
        assert_eq!(root.resolve("/elsewhere/dir"), PathBuf::from("/elsewhere/dir"));
    }

    #[test]
    fn test_discover_finds_git_dir() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join(".git")).unwrap();
        let nested = tmp.path().join("packages/some-pkg");
        std::fs::create_dir_all(&nested).unwrap();

        let root = RepoRoot::discover(&nested).unwrap();
        assert_eq!(root.path(), tmp.path());
    }

    // Both branches of locate() in one test: the env var and the current
    // directory are process-global, so the cases must not run in parallel.
    #[test]
    fn test_locate_env_override_then_discovery() {
        let override_dir = tempfile::tempdir().unwrap();
        std::env::set_var(ROOT_DIR_ENV, override_dir.path());

        let root = RepoRoot::locate().unwrap();
        assert_eq!(root.path(), override_dir.path());

        std::env::remove_var(ROOT_DIR_ENV);
        let repo = tempfile::tempdir().unwrap();
        std::fs::create_dir(repo.path().join(".git")).unwrap();
        std::env::set_current_dir(repo.path()).unwrap();

        let root = RepoRoot::locate().unwrap();
        assert_eq!(
            root.path().canonicalize().unwrap(),
            repo.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_discover_fails_without_git_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let result = RepoRoot::discover(tmp.path());
        assert!(matches!(
            result,
            Err(VendorpipeError::Path(PathError::RepoRootNotFound(_)))
        ));
    }
}
