//! Variable resolution engine for Stencil templates.
//!
//! This crate evaluates `${...}` placeholders in template content and target
//! name patterns. Placeholders resolve against one of two scopes: the
//! template-level scope (item name, workspace identity) or the file-level
//! scope, which additionally knows the concrete source/target file pair and
//! falls back to the template-level table for everything else.
//!
//! Unresolved placeholders are left in the output verbatim so that unknown
//! or unsupported variables stay visible instead of silently disappearing.
//!
//! # Examples
//!
//! ```no_run
//! use stencil_vars::{ShellCommandEvaluator, TemplateScope, substitute_template_level};
//!
//! # async fn demo() {
//! let scope = TemplateScope::new("Widget", "/work/project", "project");
//! let commands = ShellCommandEvaluator::new();
//!
//! let rendered = substitute_template_level(&scope, "Hello ${itemName}", &commands).await;
//! assert_eq!(rendered, "Hello Widget");
//! # }
//! ```

pub mod command;
pub mod command_mock;
pub mod resolver;
pub mod scope;

// Re-export public types for convenience
pub use command::{CommandEvaluator, ShellCommandEvaluator};
pub use command_mock::MockCommandEvaluator;
pub use resolver::{substitute_file_level, substitute_template_level};
pub use scope::{FileScope, TemplateScope};
