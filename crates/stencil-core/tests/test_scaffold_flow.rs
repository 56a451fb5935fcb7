//! End-to-end scaffold tests over a real (temporary) file system.
//!
//! Exercise the full path: manifest on disk, wizard selection, edit building
//! with variable substitution, and application through the standard applier.

use std::fs;
use stencil_core::tools::{StdEditApplier, StdFsAdapter};
use stencil_core::{
    ItemNameOutcome, MockWizardPrompter, ScaffoldConfig, ScaffoldOutcome, Scaffolder,
    TemplateRegistry,
};
use stencil_vars::MockCommandEvaluator;
use tempfile::TempDir;

fn scaffolder_for(workspace: &TempDir) -> Scaffolder {
    // Home probing is disabled so the developer's real manifest can never
    // leak into the test.
    let config =
        ScaffoldConfig::new(workspace.path().to_path_buf()).with_home_dir(None);
    Scaffolder::with_tools(
        config,
        TemplateRegistry::new(),
        Box::new(StdFsAdapter::new()),
        Box::new(StdEditApplier::new()),
        Box::new(MockCommandEvaluator::new()),
    )
}

fn write_workspace_manifest(workspace: &TempDir, manifest: &str) {
    let manifest_dir = workspace.path().join(".templates");
    fs::create_dir_all(&manifest_dir).unwrap();
    fs::write(manifest_dir.join("templates.json"), manifest).unwrap();
}

#[tokio::test]
async fn test_scaffold_with_folder_nesting_and_target_pattern() {
    let workspace = TempDir::new().unwrap();
    write_workspace_manifest(
        &workspace,
        r#"{
            "templates": [{
                "name": "Rust Item",
                "location": "rust-item",
                "createFolder": true,
                "files": [
                    {"source": "mod.rs", "target": "${itemName}.rs"},
                    {"source": "README.md"}
                ]
            }]
        }"#,
    );
    let template_dir = workspace.path().join(".templates").join("rust-item");
    fs::create_dir_all(&template_dir).unwrap();
    fs::write(
        template_dir.join("mod.rs"),
        "//! ${fileBasename}\npub struct ${itemName};\n",
    )
    .unwrap();
    fs::write(template_dir.join("README.md"), "# ${itemName}\n").unwrap();

    let scaffolder = scaffolder_for(&workspace);
    let prompter = MockWizardPrompter::new()
        .then_pick(Some(0))
        .then_name(ItemNameOutcome::Value("Gadget".to_string()));
    let target_folder = workspace.path().join("src");

    let outcome = scaffolder.new_item(&target_folder, &prompter).await.unwrap();

    assert_eq!(outcome, ScaffoldOutcome::Applied { files: 2 });
    assert_eq!(
        fs::read_to_string(target_folder.join("Gadget").join("Gadget.rs")).unwrap(),
        "//! Gadget.rs\npub struct Gadget;\n"
    );
    assert_eq!(
        fs::read_to_string(target_folder.join("Gadget").join("README.md")).unwrap(),
        "# Gadget\n"
    );
}

#[tokio::test]
async fn test_scaffold_without_folder_nesting() {
    let workspace = TempDir::new().unwrap();
    write_workspace_manifest(
        &workspace,
        r#"{
            "templates": [{
                "name": "Flat",
                "location": "flat",
                "files": [{"source": "a.txt"}]
            }]
        }"#,
    );
    let template_dir = workspace.path().join(".templates").join("flat");
    fs::create_dir_all(&template_dir).unwrap();
    fs::write(template_dir.join("a.txt"), "hello ${itemName}").unwrap();

    let scaffolder = scaffolder_for(&workspace);
    let prompter = MockWizardPrompter::new()
        .then_pick(Some(0))
        .then_name(ItemNameOutcome::Value("Widget".to_string()));
    let target_folder = workspace.path().join("out");

    let outcome = scaffolder.new_item(&target_folder, &prompter).await.unwrap();

    assert_eq!(outcome, ScaffoldOutcome::Applied { files: 1 });
    assert_eq!(
        fs::read_to_string(target_folder.join("a.txt")).unwrap(),
        "hello Widget"
    );
}

#[tokio::test]
async fn test_scaffold_overwrites_existing_target() {
    let workspace = TempDir::new().unwrap();
    write_workspace_manifest(
        &workspace,
        r#"{
            "templates": [{
                "name": "Flat",
                "location": "flat",
                "files": [{"source": "a.txt"}]
            }]
        }"#,
    );
    let template_dir = workspace.path().join(".templates").join("flat");
    fs::create_dir_all(&template_dir).unwrap();
    fs::write(template_dir.join("a.txt"), "new content").unwrap();
    let target_folder = workspace.path().join("out");
    fs::create_dir_all(&target_folder).unwrap();
    fs::write(target_folder.join("a.txt"), "old content").unwrap();

    let scaffolder = scaffolder_for(&workspace);
    let prompter = MockWizardPrompter::new()
        .then_pick(Some(0))
        .then_name(ItemNameOutcome::Value("X".to_string()));

    let outcome = scaffolder.new_item(&target_folder, &prompter).await.unwrap();

    assert_eq!(outcome, ScaffoldOutcome::Applied { files: 1 });
    assert_eq!(
        fs::read_to_string(target_folder.join("a.txt")).unwrap(),
        "new content"
    );
}

#[tokio::test]
async fn test_scaffold_from_registered_template() {
    let workspace = TempDir::new().unwrap();
    // Registered templates anchor to the workspace root.
    let template_dir = workspace.path().join("tpls");
    fs::create_dir_all(&template_dir).unwrap();
    fs::write(template_dir.join("item.txt"), "from registry: ${itemName}").unwrap();

    let mut scaffolder = scaffolder_for(&workspace);
    scaffolder
        .registry_mut()
        .register(
            "ext:item",
            r#"{"name": "Registered", "location": "tpls", "files": [{"source": "item.txt"}]}"#,
        )
        .unwrap();

    let prompter = MockWizardPrompter::new()
        .then_pick(Some(0))
        .then_name(ItemNameOutcome::Value("Thing".to_string()));
    let target_folder = workspace.path().join("dst");

    let outcome = scaffolder.new_item(&target_folder, &prompter).await.unwrap();

    assert_eq!(outcome, ScaffoldOutcome::Applied { files: 1 });
    assert_eq!(
        fs::read_to_string(target_folder.join("item.txt")).unwrap(),
        "from registry: Thing"
    );
}

#[tokio::test]
async fn test_missing_source_file_fails_without_partial_writes() {
    let workspace = TempDir::new().unwrap();
    write_workspace_manifest(
        &workspace,
        r#"{
            "templates": [{
                "name": "Broken",
                "location": "broken",
                "files": [{"source": "present.txt"}, {"source": "missing.txt"}]
            }]
        }"#,
    );
    let template_dir = workspace.path().join(".templates").join("broken");
    fs::create_dir_all(&template_dir).unwrap();
    fs::write(template_dir.join("present.txt"), "ok").unwrap();

    let scaffolder = scaffolder_for(&workspace);
    let prompter = MockWizardPrompter::new()
        .then_pick(Some(0))
        .then_name(ItemNameOutcome::Value("X".to_string()));
    let target_folder = workspace.path().join("out");

    let result = scaffolder.new_item(&target_folder, &prompter).await;

    assert!(result.is_err());
    // The batch failed before application; nothing was written.
    assert!(!target_folder.join("present.txt").exists());
}

#[tokio::test]
async fn test_candidates_sorted_by_display_name() {
    let workspace = TempDir::new().unwrap();
    write_workspace_manifest(
        &workspace,
        r#"{
            "templates": [
                {"name": "Zeta", "files": []},
                {"name": "Alpha", "files": []}
            ]
        }"#,
    );

    let scaffolder = scaffolder_for(&workspace);
    let candidates = scaffolder.candidates().unwrap();

    assert_eq!(candidates[0].template.name, "Alpha");
    assert_eq!(candidates[1].template.name, "Zeta");
}
