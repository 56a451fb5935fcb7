//! File system adapter trait.
//!
//! Defines the interface for the file system operations scaffolding needs:
//! reading template sources and manifests, probing for existence, and the
//! writes performed by the standard edit applier. Implementations can be real
//! (`std::fs`) or mocked for testing.

use crate::error::Result;
use std::path::Path;

/// File system adapter trait.
pub trait FsAdapter: Send + Sync {
    /// Reads the contents of a file as a string.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::PathNotFound` if the file doesn't exist,
    /// `ScaffoldError::FileReadError` if reading fails.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Writes a string to a file, creating it and any missing parent
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::FileWriteError` if writing fails, or
    /// `ScaffoldError::PermissionDenied` if lacking write permissions.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Checks if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Creates a directory and all missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::FileWriteError` if creation fails, or
    /// `ScaffoldError::PermissionDenied` if lacking write permissions.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Checks if a path exists and is a file.
    fn is_file(&self, path: &Path) -> bool;
}
