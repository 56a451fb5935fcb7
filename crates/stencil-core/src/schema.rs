//! Template and manifest data shapes.
//!
//! These are the wire types for the JSON manifest format and for templates
//! registered programmatically as JSON strings. Field names follow the
//! manifest convention (camelCase). All three types are plain read-only
//! data: constructed fresh from JSON per operation and discarded afterwards.

use serde::{Deserialize, Serialize};

/// One source-to-target file mapping within a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTemplate {
    /// Template-root relative path to the source file.
    pub source: String,

    /// Target-folder relative path or pattern. May itself contain variables,
    /// resolved at template level. If missing, `source` is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// A named unit of scaffolding: a base location plus an ordered list of file
/// templates and folder-nesting behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Template name, displayed in the selection UI.
    pub name: String,

    /// Template description, displayed in the selection UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Directory containing the template's files, relative to the owning
    /// manifest's directory. Empty or absent anchors the template directly
    /// at its root location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// File templates to add, in order. An empty list is legal and yields an
    /// empty edit set.
    #[serde(default)]
    pub files: Vec<FileTemplate>,

    /// Nest all target paths under a subfolder named after the captured item
    /// name. Defaults to `false`.
    #[serde(default)]
    pub create_folder: bool,

    /// Default item name offered by the wizard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_item_name: Option<String>,
}

/// A manifest listing zero or more templates, located at a well-known path
/// under a home or workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemplatesManifest {
    /// List of available templates.
    #[serde(default)]
    pub templates: Vec<Template>,
}
