//! Candidate collection.
//!
//! The candidate set is the merged view of registered templates and manifest
//! templates offered to the wizard. It is rebuilt on every invocation so that
//! on-disk manifest edits and registry changes are always picked up; nothing
//! is cached across invocations.

use crate::config::ScaffoldConfig;
use crate::error::Result;
use crate::manifest::load_manifest;
use crate::registry::TemplateRegistry;
use crate::schema::Template;
use crate::tools::fs::FsAdapter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One selectable template plus the root its relative paths resolve against.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Synthesized key: the registration id, or `name@manifest-path[index]`
    /// for manifest entries.
    pub id: String,

    /// The template itself.
    pub template: Template,

    /// Directory the template's `location` resolves against: the manifest's
    /// directory, or `None` for registered templates, which fall back to the
    /// workspace root.
    pub root: Option<PathBuf>,
}

/// Collects the candidate set: registry entries first, then the home
/// manifest, then the workspace manifest.
///
/// Absent manifests are probed and skipped silently; a present but
/// unreadable or malformed manifest is an error.
///
/// # Errors
///
/// Propagates manifest read and parse errors.
pub fn collect_candidates(
    registry: &TemplateRegistry,
    fs: &dyn FsAdapter,
    config: &ScaffoldConfig,
) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();

    // Programmatically registered templates carry no manifest root.
    for (id, template) in registry.templates() {
        candidates.push(Candidate {
            id: id.to_string(),
            template: template.clone(),
            root: None,
        });
    }

    // User folder first, then workspace.
    let mut manifest_paths = Vec::new();
    if let Some(home_manifest) = config.home_manifest() {
        manifest_paths.push(home_manifest);
    }
    manifest_paths.push(config.workspace_manifest());

    for path in manifest_paths {
        if !fs.is_file(&path) {
            debug!("no manifest at {}", path.display());
            continue;
        }

        let manifest = load_manifest(fs, &path)?;
        let root = path.parent().map(Path::to_path_buf);
        for (index, template) in manifest.templates.into_iter().enumerate() {
            candidates.push(Candidate {
                id: format!("{}@{}[{}]", template.name, path.display(), index),
                template,
                root: root.clone(),
            });
        }
    }

    debug!("collected {} template candidate(s)", candidates.len());
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;
    use crate::tools::fs_mock::MockFsAdapter;

    fn config() -> ScaffoldConfig {
        ScaffoldConfig::new(PathBuf::from("/work/project"))
            .with_home_dir(Some(PathBuf::from("/home/user")))
    }

    const MANIFEST: &str =
        r#"{"templates": [{"name": "A", "files": []}, {"name": "B", "files": []}]}"#;

    #[test]
    fn test_collect_skips_absent_manifests() {
        let registry = TemplateRegistry::new();
        let fs = MockFsAdapter::new();

        let candidates = collect_candidates(&registry, &fs, &config()).unwrap();

        assert!(candidates.is_empty());
    }

    #[test]
    fn test_collect_merges_registry_and_manifests() {
        let mut registry = TemplateRegistry::new();
        registry
            .register("ext:reg", r#"{"name": "Registered", "files": []}"#)
            .unwrap();
        let fs = MockFsAdapter::new()
            .with_file("/home/user/.templates/templates.json", MANIFEST)
            .with_file("/work/project/.templates/templates.json", MANIFEST);

        let candidates = collect_candidates(&registry, &fs, &config()).unwrap();

        // Registry entry first, then two per manifest.
        assert_eq!(candidates.len(), 5);
        assert_eq!(candidates[0].id, "ext:reg");
        assert!(candidates[0].root.is_none());
        assert!(candidates[1].id.starts_with("A@"));
        assert!(candidates[1].id.contains("/home/user/"));
        assert!(candidates[1].id.ends_with("[0]"));
        assert_eq!(
            candidates[1].root.as_deref(),
            Some(Path::new("/home/user/.templates"))
        );
        assert!(candidates[4].id.contains("/work/project/"));
    }

    #[test]
    fn test_manifest_root_is_manifest_directory() {
        let registry = TemplateRegistry::new();
        let fs =
            MockFsAdapter::new().with_file("/work/project/.templates/templates.json", MANIFEST);

        let candidates = collect_candidates(&registry, &fs, &config()).unwrap();

        assert_eq!(
            candidates[0].root.as_deref(),
            Some(Path::new("/work/project/.templates"))
        );
    }

    #[test]
    fn test_malformed_manifest_propagates_error() {
        let registry = TemplateRegistry::new();
        let fs = MockFsAdapter::new()
            .with_file("/work/project/.templates/templates.json", "not json {");

        let result = collect_candidates(&registry, &fs, &config());

        assert!(matches!(result, Err(ScaffoldError::ManifestParse { .. })));
    }

    #[test]
    fn test_no_home_dir_probes_workspace_only() {
        let registry = TemplateRegistry::new();
        let fs =
            MockFsAdapter::new().with_file("/work/project/.templates/templates.json", MANIFEST);
        let config = ScaffoldConfig::new(PathBuf::from("/work/project")).with_home_dir(None);

        let candidates = collect_candidates(&registry, &fs, &config).unwrap();

        assert_eq!(candidates.len(), 2);
    }
}
