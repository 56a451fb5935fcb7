//! In-memory file system adapter for testing.

use crate::error::{Result, ScaffoldError};
use crate::tools::fs::FsAdapter;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock file system adapter backed by in-memory maps.
///
/// Thread-safe via `Arc<Mutex<...>>`; clones share the same storage so a
/// test can keep a handle while the adapter is boxed into a scaffolder.
///
/// # Examples
///
/// ```
/// use stencil_core::tools::{FsAdapter, MockFsAdapter};
/// use std::path::Path;
///
/// let fs = MockFsAdapter::new();
/// fs.write(Path::new("/a.txt"), "content").unwrap();
/// assert_eq!(fs.read_to_string(Path::new("/a.txt")).unwrap(), "content");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFsAdapter {
    /// File contents by path.
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    /// Known directories.
    dirs: Arc<Mutex<HashSet<PathBuf>>>,
    /// Paths whose reads have been observed, in order.
    reads: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockFsAdapter {
    /// Creates a new empty mock file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the mock file system with files.
    pub fn with_files(files: HashMap<PathBuf, String>) -> Self {
        Self {
            files: Arc::new(Mutex::new(files)),
            ..Self::default()
        }
    }

    /// Adds a file, builder style.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.into());
        self
    }

    /// Returns a copy of all files in the mock file system.
    pub fn all_files(&self) -> HashMap<PathBuf, String> {
        self.files.lock().unwrap().clone()
    }

    /// Returns the reads observed so far, in order.
    pub fn observed_reads(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }
}

impl FsAdapter for MockFsAdapter {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| ScaffoldError::PathNotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.dirs.lock().unwrap().insert(parent.to_path_buf());
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
            || self.dirs.lock().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut dirs = self.dirs.lock().unwrap();
        let mut current = Some(path);
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
