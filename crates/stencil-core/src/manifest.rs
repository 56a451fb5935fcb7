//! Manifest loading.
//!
//! A manifest is a UTF-8 JSON document with the top-level shape
//! `{"templates": [...]}`. Existence-checking is the caller's responsibility:
//! the home and workspace manifest locations are optional, so callers probe
//! with [`crate::tools::FsAdapter::is_file`] and treat an absent manifest as
//! "no manifest here" rather than a fatal error.

use crate::error::{Result, ScaffoldError};
use crate::schema::TemplatesManifest;
use crate::tools::fs::FsAdapter;
use std::path::Path;

/// Loads and parses a templates manifest.
///
/// # Errors
///
/// Returns a read error (`PathNotFound`/`FileReadError`) when the location is
/// unreachable, and `ScaffoldError::ManifestParse` when the content is not
/// valid manifest JSON.
pub fn load_manifest(fs: &dyn FsAdapter, path: &Path) -> Result<TemplatesManifest> {
    let contents = fs.read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| ScaffoldError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}
