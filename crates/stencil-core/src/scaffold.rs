//! Scaffold orchestration.
//!
//! [`Scaffolder`] ties the pieces together for one "new item" operation:
//! collect candidates, run the wizard, build the edit set, hand it to the
//! edit applier. Everything that may suspend runs sequentially on one task;
//! nothing within one operation executes concurrently.

use crate::catalog::{Candidate, collect_candidates};
use crate::config::ScaffoldConfig;
use crate::edit::{EditContext, build_edit};
use crate::error::Result;
use crate::registry::TemplateRegistry;
use crate::tools::apply::EditApplier;
use crate::tools::apply_impl::StdEditApplier;
use crate::tools::fs::FsAdapter;
use crate::tools::fs_impl::StdFsAdapter;
use crate::wizard::{WizardPrompter, run_wizard};
use std::path::Path;
use stencil_vars::{CommandEvaluator, ShellCommandEvaluator};
use tracing::{info, warn};

/// How one scaffold operation ended.
///
/// An empty candidate set and user cancellation are normal terminations, not
/// errors; keeping them out of the error type means `?` can never turn them
/// into failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The edit set was built and applied.
    Applied {
        /// Number of files created.
        files: usize,
    },

    /// The merged candidate set was empty; reported as a user-visible
    /// warning, the operation ends cleanly.
    NoTemplates,

    /// The user cancelled during the wizard; silent termination with no side
    /// effects.
    Cancelled,
}

/// Orchestrator for scaffold operations.
///
/// Owns the configuration, the template registry, and the adapters to the
/// external collaborators (file system, edit application, command
/// evaluation). The wizard prompter is passed per call since it belongs to
/// the invoking UI.
pub struct Scaffolder {
    config: ScaffoldConfig,
    registry: TemplateRegistry,
    fs: Box<dyn FsAdapter>,
    applier: Box<dyn EditApplier>,
    commands: Box<dyn CommandEvaluator>,
}

impl Scaffolder {
    /// Creates a scaffolder with the standard adapters: real file system,
    /// file-writing applier, shell-backed command evaluation.
    pub fn new(config: ScaffoldConfig) -> Self {
        Self::with_tools(
            config,
            TemplateRegistry::new(),
            Box::new(StdFsAdapter::new()),
            Box::new(StdEditApplier::new()),
            Box::new(ShellCommandEvaluator::new()),
        )
    }

    /// Creates a scaffolder with explicit adapters, for tests and embedding
    /// hosts.
    pub fn with_tools(
        config: ScaffoldConfig,
        registry: TemplateRegistry,
        fs: Box<dyn FsAdapter>,
        applier: Box<dyn EditApplier>,
        commands: Box<dyn CommandEvaluator>,
    ) -> Self {
        Self {
            config,
            registry,
            fs,
            applier,
            commands,
        }
    }

    /// The scaffolder's configuration.
    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// The template registry.
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Mutable access to the template registry, for the registration
    /// interface.
    pub fn registry_mut(&mut self) -> &mut TemplateRegistry {
        &mut self.registry
    }

    /// Collects the current candidate set, sorted by template display name.
    ///
    /// Rebuilt on every call; never cached.
    pub fn candidates(&self) -> Result<Vec<Candidate>> {
        let mut candidates = collect_candidates(&self.registry, self.fs.as_ref(), &self.config)?;
        candidates.sort_by(|a, b| a.template.name.cmp(&b.template.name));
        Ok(candidates)
    }

    /// Runs one complete "new item" operation against `target_folder`.
    ///
    /// # Errors
    ///
    /// Propagates manifest parse errors, source read errors, and apply
    /// failures. Cancellation and an empty candidate set are outcomes, not
    /// errors.
    pub async fn new_item(
        &self,
        target_folder: &Path,
        prompter: &dyn WizardPrompter,
    ) -> Result<ScaffoldOutcome> {
        let candidates = self.candidates()?;
        if candidates.is_empty() {
            warn!(
                "no templates available; they can be defined in the workspace or user directory"
            );
            return Ok(ScaffoldOutcome::NoTemplates);
        }

        let Some(selection) = run_wizard(prompter, &candidates) else {
            return Ok(ScaffoldOutcome::Cancelled);
        };
        let candidate = &candidates[selection.candidate_index];
        info!(
            "scaffolding '{}' from template {}",
            selection.item_name, candidate.id
        );

        // Registered templates have no manifest directory to anchor to and
        // resolve against the workspace root.
        let root = candidate
            .root
            .clone()
            .unwrap_or_else(|| self.config.workspace_root.clone());
        let template_root = match candidate.template.location.as_deref() {
            Some(location) if !location.is_empty() => root.join(location),
            _ => root,
        };

        let context = EditContext {
            item_name: selection.item_name,
            target_folder: target_folder.to_path_buf(),
            template: candidate.template.clone(),
            template_root,
            workspace_folder: self.config.workspace_root.clone(),
            workspace_name: self.config.workspace_name.clone(),
        };

        let edit = build_edit(&context, self.fs.as_ref(), self.commands.as_ref()).await?;
        self.applier.apply(&edit)?;

        Ok(ScaffoldOutcome::Applied { files: edit.len() })
    }
}

impl std::fmt::Debug for Scaffolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scaffolder")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
