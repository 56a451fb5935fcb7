//! Registry for programmatically contributed templates.
//!
//! The registry is an explicit, injectable store rather than a module-level
//! singleton: the embedding host creates one at startup and passes it by
//! reference, which keeps tests isolated. Entries have no manifest to anchor
//! to and are assumed to carry self-sufficient file paths. No persistence;
//! entries live until unregistered or the registry is dropped.

use crate::error::Result;
use crate::schema::Template;
use std::collections::BTreeMap;

/// Store of registered templates, keyed by registrant-chosen id.
///
/// The recommended id format is `extension-id:template-id` so different
/// registrants cannot collide by accident.
///
/// # Examples
///
/// ```
/// use stencil_core::TemplateRegistry;
///
/// let mut registry = TemplateRegistry::new();
/// registry.register("ext:basic", r#"{"name": "Basic", "files": []}"#).unwrap();
/// assert_eq!(registry.len(), 1);
/// assert!(registry.unregister("ext:basic"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Template>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `template_json` into a [`Template`] and stores it under `id`,
    /// overwriting any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::TemplateParse` for malformed JSON; nothing is
    /// caught here, the caller handles it.
    pub fn register(&mut self, id: impl Into<String>, template_json: &str) -> Result<()> {
        let template: Template = serde_json::from_str(template_json)?;
        self.templates.insert(id.into(), template);
        Ok(())
    }

    /// Removes the entry under `id`.
    ///
    /// Returns whether an entry existed.
    pub fn unregister(&mut self, id: &str) -> bool {
        self.templates.remove(id).is_some()
    }

    /// Read-only view of the registered templates, in id order.
    pub fn templates(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.templates.iter().map(|(id, t)| (id.as_str(), t))
    }

    /// Looks up a single registered template.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
