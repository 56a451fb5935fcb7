//! Variable scopes for placeholder lookup.
//!
//! Two explicit lookup tables back the resolver: [`TemplateScope`] for
//! variables that exist before any concrete file is known, and [`FileScope`]
//! for variables tied to a resolved source/target pair. The file-level table
//! is a strict superset: lookups that miss fall through to the template-level
//! table.

use std::path::{Path, PathBuf};

/// Template-level variable scope.
///
/// Carries the values available during target-name computation, before a
/// file-level context exists.
///
/// # Examples
///
/// ```
/// use stencil_vars::TemplateScope;
///
/// let scope = TemplateScope::new("Widget", "/work/project", "project");
/// assert_eq!(scope.lookup("itemName"), Some("Widget".to_string()));
/// assert_eq!(scope.lookup("nope"), None);
/// ```
#[derive(Debug, Clone)]
pub struct TemplateScope {
    /// Item name captured from the user.
    pub item_name: String,

    /// Workspace root directory.
    pub workspace_folder: PathBuf,

    /// Workspace display name.
    pub workspace_name: String,
}

impl TemplateScope {
    /// Creates a new template-level scope.
    #[must_use]
    pub fn new(
        item_name: impl Into<String>,
        workspace_folder: impl Into<PathBuf>,
        workspace_name: impl Into<String>,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            workspace_folder: workspace_folder.into(),
            workspace_name: workspace_name.into(),
        }
    }

    /// Looks up a template-level variable by name (without the `${}` wrapper).
    ///
    /// Supported names: `itemName`, `pathSeparator`, `workspaceFolder`,
    /// `workspaceFolderBasename`. Returns `None` for anything else, which the
    /// resolver turns into verbatim passthrough.
    pub fn lookup(&self, name: &str) -> Option<String> {
        match name {
            "itemName" => Some(self.item_name.clone()),
            "pathSeparator" => Some(std::path::MAIN_SEPARATOR_STR.to_string()),
            "workspaceFolder" => Some(self.workspace_folder.display().to_string()),
            "workspaceFolderBasename" => Some(self.workspace_name.clone()),
            _ => None,
        }
    }
}

/// File-level variable scope.
///
/// Extends a [`TemplateScope`] with the resolved source/target pair of the
/// file currently being processed. Only exists while a single file template
/// entry is handled.
#[derive(Debug, Clone)]
pub struct FileScope {
    /// Template-level scope this file scope extends.
    pub template: TemplateScope,

    /// Resolved source file location.
    pub source: PathBuf,

    /// Resolved target file location.
    pub target: PathBuf,
}

impl FileScope {
    /// Creates a new file-level scope from a template scope and the resolved
    /// source/target pair.
    #[must_use]
    pub fn new(
        template: TemplateScope,
        source: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
    ) -> Self {
        Self {
            template,
            source: source.into(),
            target: target.into(),
        }
    }

    /// Looks up a file-level variable by name (without the `${}` wrapper).
    ///
    /// Handles `file`, `fileBasename`, `fileBasenameNoExtension` and
    /// `fileExtname`; everything else falls through to
    /// [`TemplateScope::lookup`].
    pub fn lookup(&self, name: &str) -> Option<String> {
        match name {
            "file" => Some(self.target.display().to_string()),
            "fileBasename" => Some(basename(&self.target)),
            "fileBasenameNoExtension" => Some(
                self.target
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            ),
            // Extension including the leading dot; empty when there is none.
            "fileExtname" => Some(
                self.target
                    .extension()
                    .map(|e| format!(".{}", e.to_string_lossy()))
                    .unwrap_or_default(),
            ),
            _ => self.template.lookup(name),
        }
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
