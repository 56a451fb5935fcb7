//! Scaffold configuration.
//!
//! Holds the workspace identity and the manifest locations probed on each
//! invocation. Manifest paths are relative and independently overridable for
//! the home (global) and workspace locations, with a shared default.

use std::path::{Path, PathBuf};

/// Default manifest path, relative to a home or workspace root.
pub const DEFAULT_MANIFEST_PATH: &str = "./.templates/templates.json";

/// Configuration for scaffold operations.
///
/// # Examples
///
/// ```
/// use stencil_core::ScaffoldConfig;
/// use std::path::PathBuf;
///
/// let config = ScaffoldConfig::new(PathBuf::from("/work/project"));
/// assert_eq!(config.workspace_name, "project");
/// ```
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Workspace root directory (absolute path).
    pub workspace_root: PathBuf,

    /// Workspace display name.
    pub workspace_name: String,

    /// User home directory; `None` when it cannot be determined, in which
    /// case the global manifest is simply not probed.
    pub home_dir: Option<PathBuf>,

    /// Global manifest path, relative to the home directory.
    pub global_manifest_path: PathBuf,

    /// Workspace manifest path, relative to the workspace root.
    pub workspace_manifest_path: PathBuf,
}

impl ScaffoldConfig {
    /// Creates a configuration with defaults derived from the workspace root.
    ///
    /// The workspace name is the final path segment and the home directory is
    /// discovered via [`dirs::home_dir`]. Both manifest paths start at
    /// [`DEFAULT_MANIFEST_PATH`].
    pub fn new(workspace_root: PathBuf) -> Self {
        let workspace_name = workspace_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| workspace_root.display().to_string());

        Self {
            workspace_root,
            workspace_name,
            home_dir: dirs::home_dir(),
            global_manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            workspace_manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
        }
    }

    /// Overrides the workspace display name.
    #[must_use]
    pub fn with_workspace_name(mut self, name: impl Into<String>) -> Self {
        self.workspace_name = name.into();
        self
    }

    /// Overrides the home directory (or disables global manifest probing
    /// with `None`).
    #[must_use]
    pub fn with_home_dir(mut self, home_dir: Option<PathBuf>) -> Self {
        self.home_dir = home_dir;
        self
    }

    /// Overrides the global manifest relative path. An empty path restores
    /// the default.
    #[must_use]
    pub fn with_global_manifest_path(mut self, path: impl AsRef<Path>) -> Self {
        self.global_manifest_path = non_empty_or_default(path.as_ref());
        self
    }

    /// Overrides the workspace manifest relative path. An empty path restores
    /// the default.
    #[must_use]
    pub fn with_workspace_manifest_path(mut self, path: impl AsRef<Path>) -> Self {
        self.workspace_manifest_path = non_empty_or_default(path.as_ref());
        self
    }

    /// Absolute path to the manifest in the user's home directory, when a
    /// home directory is known.
    pub fn home_manifest(&self) -> Option<PathBuf> {
        self.home_dir
            .as_ref()
            .map(|home| home.join(&self.global_manifest_path))
    }

    /// Absolute path to the manifest in the workspace root.
    pub fn workspace_manifest(&self) -> PathBuf {
        self.workspace_root.join(&self.workspace_manifest_path)
    }
}

fn non_empty_or_default(path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        PathBuf::from(DEFAULT_MANIFEST_PATH)
    } else {
        path.to_path_buf()
    }
}
