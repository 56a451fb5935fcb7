//! Stencil Core - File-scaffolding engine.
//!
//! This crate turns a named template (a set of source files plus metadata)
//! into a batch of target files with placeholder variables substituted, then
//! hands the batch to an edit applier as one atomic set of changes.
//!
//! # Architecture
//!
//! - [`schema`]: manifest and template data shapes
//! - [`config`]: workspace identity and manifest locations
//! - [`registry`]: injectable store for programmatically registered templates
//! - [`manifest`]: manifest loading
//! - [`catalog`]: per-invocation candidate collection
//! - [`wizard`]: selection/capture state machine behind a prompter seam
//! - [`edit`]: edit building (paths, content, substitution)
//! - [`scaffold`]: orchestration of one "new item" operation
//! - [`tools`]: file system and edit application adapters (std + mock)
//! - [`error`]: error types and result type alias
//!
//! Variable resolution itself lives in the `stencil-vars` crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use stencil_core::{ScaffoldConfig, Scaffolder};
//! use std::path::{Path, PathBuf};
//!
//! let config = ScaffoldConfig::new(PathBuf::from("/work/project"));
//! let scaffolder = Scaffolder::new(config);
//!
//! // prompter: any WizardPrompter implementation
//! let outcome = scaffolder.new_item(Path::new("/work/project/src"), &prompter).await?;
//! ```

pub mod catalog;
pub mod config;
pub mod edit;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod schema;
pub mod scaffold;
pub mod tools;
pub mod wizard;

// Re-export core types for convenience
pub use catalog::{Candidate, collect_candidates};
pub use config::{DEFAULT_MANIFEST_PATH, ScaffoldConfig};
pub use edit::{EditContext, EditEntry, EditSet, build_edit};
pub use error::{Result, ScaffoldError};
pub use manifest::load_manifest;
pub use registry::TemplateRegistry;
pub use schema::{FileTemplate, Template, TemplatesManifest};
pub use scaffold::{ScaffoldOutcome, Scaffolder};
pub use wizard::{
    ItemNameOutcome, MockWizardPrompter, WizardPrompter, WizardSelection, run_wizard,
    validate_item_name,
};
