//! Standard file system adapter using `std::fs`.

use crate::error::{Result, ScaffoldError};
use crate::tools::fs::FsAdapter;
use std::path::Path;

/// Standard file system adapter.
///
/// Provides real file system access and is the default implementation used
/// in production. For testing, use [`crate::tools::fs_mock::MockFsAdapter`].
#[derive(Debug, Default)]
pub struct StdFsAdapter;

impl StdFsAdapter {
    /// Creates a new standard file system adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FsAdapter for StdFsAdapter {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScaffoldError::PathNotFound(path.to_path_buf())
            } else {
                ScaffoldError::FileReadError(format!("{}: {}", path.display(), e))
            }
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            self.create_dir_all(parent)?;
        }

        std::fs::write(path, content).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                ScaffoldError::PermissionDenied(path.display().to_string())
            } else {
                ScaffoldError::FileWriteError(format!("{}: {}", path.display(), e))
            }
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                ScaffoldError::PermissionDenied(path.display().to_string())
            } else {
                ScaffoldError::FileWriteError(format!("{}: {}", path.display(), e))
            }
        })
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
