//! Edit building: turning a resolved template into file creations.
//!
//! [`build_edit`] walks a template's file entries in manifest order and
//! produces an [`EditSet`], the ordered batch of `(target, content,
//! needs_confirmation)` entries handed to the edit application boundary as
//! one transaction. Per file, path computation (target name pattern, folder
//! nesting, source path) happens before the source content is read or
//! substituted, so target-name problems and content problems stay
//! distinguishable. Any single file's read failure aborts the whole batch;
//! no partial edit sets are returned.

use crate::error::{Result, ScaffoldError};
use crate::schema::Template;
use crate::tools::fs::FsAdapter;
use std::path::PathBuf;
use stencil_vars::{
    CommandEvaluator, FileScope, TemplateScope, substitute_file_level, substitute_template_level,
};
use tracing::debug;

/// Template-level edit context: everything known once a template has been
/// selected and an item name captured, before any individual file is
/// processed.
#[derive(Debug, Clone)]
pub struct EditContext {
    /// Item name captured from the user.
    pub item_name: String,

    /// Folder new items are created under.
    pub target_folder: PathBuf,

    /// Selected template.
    pub template: Template,

    /// Directory the template's source files resolve against.
    pub template_root: PathBuf,

    /// Workspace root directory.
    pub workspace_folder: PathBuf,

    /// Workspace display name.
    pub workspace_name: String,
}

impl EditContext {
    fn template_scope(&self) -> TemplateScope {
        TemplateScope::new(
            self.item_name.clone(),
            self.workspace_folder.clone(),
            self.workspace_name.clone(),
        )
    }
}

/// One file creation within an edit set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEntry {
    /// Target file location.
    pub target: PathBuf,

    /// Substituted file content.
    pub content: String,

    /// Whether the target already exists. Pre-existing targets are still
    /// recorded (overwrite with confirmation), never silently skipped; the
    /// flag lets the applier request confirmation per entry.
    pub needs_confirmation: bool,
}

/// The ordered batch of file creations produced from one template, applied
/// atomically by the edit application boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSet {
    /// Entries in manifest order.
    pub entries: Vec<EditEntry>,
}

impl EditSet {
    /// Number of entries in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the complete edit set for a template.
///
/// Files are processed strictly in the template's declared order. For each
/// file entry: the target name is computed (template-level substitution over
/// the `target` pattern when present, with an empty result falling back to
/// `source`), the target path is nested under the item name when
/// `create_folder` is set, the source content is read, and file-level
/// substitution runs over it with the now-complete file scope.
///
/// # Errors
///
/// Returns `ScaffoldError::SourceRead` if any source file cannot be read;
/// the whole batch is abandoned.
pub async fn build_edit(
    context: &EditContext,
    fs: &dyn FsAdapter,
    commands: &dyn CommandEvaluator,
) -> Result<EditSet> {
    let scope = context.template_scope();
    let mut entries = Vec::with_capacity(context.template.files.len());

    for file in &context.template.files {
        let target_name = match &file.target {
            Some(pattern) => {
                let resolved = substitute_template_level(&scope, pattern, commands).await;
                // An all-unresolvable pattern substituting to nothing falls
                // back to the source name.
                if resolved.is_empty() {
                    file.source.clone()
                } else {
                    resolved
                }
            }
            None => file.source.clone(),
        };

        let target = if context.template.create_folder {
            context
                .target_folder
                .join(&context.item_name)
                .join(&target_name)
        } else {
            context.target_folder.join(&target_name)
        };
        let source = context.template_root.join(&file.source);
        debug!("file template {} -> {}", source.display(), target.display());

        let raw = fs
            .read_to_string(&source)
            .map_err(|e| ScaffoldError::SourceRead {
                path: source.clone(),
                source: Box::new(e),
            })?;

        let file_scope = FileScope::new(scope.clone(), source, target.clone());
        let content = substitute_file_level(&file_scope, &raw, commands).await;

        entries.push(EditEntry {
            needs_confirmation: fs.exists(&target),
            target,
            content,
        });
    }

    Ok(EditSet { entries })
}
