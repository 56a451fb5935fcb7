//! Stencil CLI - file scaffolding from templates.
//!
//! Command-line host for the stencil engine: creates new items from
//! templates defined in home/workspace manifests or registered
//! programmatically for the lifetime of the process.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stencil_core::{ScaffoldConfig, ScaffoldOutcome, Scaffolder};
use tracing::{error, info};

mod prompt;

use prompt::ConsolePrompter;

/// Stencil - create files from templates
///
/// Templates are defined in a JSON manifest (default:
/// `.templates/templates.json`) under the home directory or the workspace
/// root.
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available stencil commands
#[derive(Subcommand)]
enum Commands {
    /// Create new item(s) from a template
    ///
    /// Presents the available templates, asks for an item name, and applies
    /// the template's file creations under the target folder.
    New {
        /// Folder to add new items to (defaults to the workspace root)
        target_folder: Option<PathBuf>,

        /// Workspace root (defaults to the current directory)
        #[arg(long)]
        workspace_root: Option<PathBuf>,
    },

    /// List available templates
    List {
        /// Workspace root (defaults to the current directory)
        #[arg(long)]
        workspace_root: Option<PathBuf>,
    },

    /// Register a template for the lifetime of this process
    ///
    /// Mainly useful for embedding hosts; a registration does not outlive
    /// the process.
    Register {
        /// Template id (recommended format: "extension-id:template-id")
        id: String,

        /// Template JSON, or @path to a file containing it
        template: String,
    },

    /// Unregister a previously registered template
    Unregister {
        /// Template id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = run_command(cli.command).await {
        error!("Command failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize tracing subscriber for structured logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if verbose {
        EnvFilter::new("stencil=debug,stencil_core=debug,stencil_vars=trace")
    } else {
        EnvFilter::new("stencil=info,stencil_core=info,stencil_vars=info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();
}

/// Execute the specified command
async fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::New {
            target_folder,
            workspace_root,
        } => run_new(target_folder, workspace_root).await,
        Commands::List { workspace_root } => run_list(workspace_root),
        Commands::Register { id, template } => run_register(&id, &template),
        Commands::Unregister { id } => run_unregister(&id),
    }
}

/// Run the new command
async fn run_new(target_folder: Option<PathBuf>, workspace_root: Option<PathBuf>) -> Result<()> {
    let workspace_root = resolve_workspace_root(workspace_root)?;
    // Relative target folders resolve against the workspace root.
    let target_folder = match target_folder {
        Some(folder) if folder.is_absolute() => folder,
        Some(folder) => workspace_root.join(folder),
        None => workspace_root.clone(),
    };
    let target_folder = target_folder.canonicalize().unwrap_or(target_folder);
    if !target_folder.starts_with(&workspace_root) {
        bail!(
            "Target folder does not belong to the workspace. Folder: {}",
            target_folder.display()
        );
    }

    info!("Scaffolding into {}", target_folder.display());
    let scaffolder = Scaffolder::new(ScaffoldConfig::new(workspace_root));
    let outcome = scaffolder
        .new_item(&target_folder, &ConsolePrompter::new())
        .await
        .context("Failed to create items from template")?;

    match outcome {
        ScaffoldOutcome::Applied { files } => {
            println!("✔ Created {} file(s) in {}", files, target_folder.display());
        }
        ScaffoldOutcome::NoTemplates => {
            println!(
                "There are no templates available. They can be defined in your workspace or user directory"
            );
        }
        ScaffoldOutcome::Cancelled => {
            // Cancellation is silent by design.
        }
    }

    Ok(())
}

/// Run the list command
fn run_list(workspace_root: Option<PathBuf>) -> Result<()> {
    let workspace_root = resolve_workspace_root(workspace_root)?;
    let scaffolder = Scaffolder::new(ScaffoldConfig::new(workspace_root));

    let candidates = scaffolder
        .candidates()
        .context("Failed to collect templates")?;
    if candidates.is_empty() {
        println!("No templates available");
        return Ok(());
    }

    for candidate in candidates {
        match &candidate.template.description {
            Some(description) => {
                println!("{} - {} ({})", candidate.template.name, description, candidate.id)
            }
            None => println!("{} ({})", candidate.template.name, candidate.id),
        }
    }

    Ok(())
}

/// Run the register command
fn run_register(id: &str, template: &str) -> Result<()> {
    let template_json = match template.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template file: {path}"))?,
        None => template.to_string(),
    };

    let mut scaffolder = Scaffolder::new(ScaffoldConfig::new(resolve_workspace_root(None)?));
    scaffolder
        .registry_mut()
        .register(id, &template_json)
        .context("Failed to register template")?;

    println!("✔ Registered template: {id}");
    println!("Note: registrations last for the lifetime of the registering process");

    Ok(())
}

/// Run the unregister command
fn run_unregister(id: &str) -> Result<()> {
    let mut scaffolder = Scaffolder::new(ScaffoldConfig::new(resolve_workspace_root(None)?));
    let existed = scaffolder.registry_mut().unregister(id);

    if existed {
        println!("✔ Unregistered template: {id}");
    } else {
        println!("No template registered under: {id}");
    }

    Ok(())
}

/// Resolve the workspace root, defaulting to the current directory.
fn resolve_workspace_root(workspace_root: Option<PathBuf>) -> Result<PathBuf> {
    match workspace_root {
        Some(root) => {
            if !root.is_dir() {
                bail!("Workspace root is not a directory: {}", root.display());
            }
            Ok(root.canonicalize().unwrap_or(root))
        }
        None => std::env::current_dir().context("Failed to get current directory"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_workspace_root_explicit() {
        let temp_dir = TempDir::new().unwrap();

        let root = resolve_workspace_root(Some(temp_dir.path().to_path_buf())).unwrap();

        assert_eq!(root, temp_dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_workspace_root_rejects_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("f.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(resolve_workspace_root(Some(file)).is_err());
    }

    #[test]
    fn test_target_folder_containment() {
        let workspace = Path::new("/work/project");

        assert!(Path::new("/work/project/src").starts_with(workspace));
        assert!(!Path::new("/elsewhere").starts_with(workspace));
    }
}
