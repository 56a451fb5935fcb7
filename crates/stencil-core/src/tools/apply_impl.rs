//! Standard edit applier writing entries to the file system.

use crate::edit::EditSet;
use crate::error::{Result, ScaffoldError};
use crate::tools::apply::EditApplier;
use crate::tools::fs::FsAdapter;
use crate::tools::fs_impl::StdFsAdapter;
use tracing::{debug, info, warn};

/// Standard edit applier.
///
/// Writes each entry through a file system adapter, creating missing parent
/// directories. Write failures are reported as `ApplyFailed`; the boundary
/// exposes no finer-grained reason to callers. Writes are sequential with no
/// rollback, so a mid-batch failure leaves earlier entries on disk. Entries
/// flagged `needs_confirmation` are overwritten with a warning; interactive
/// confirmation belongs to hosts that can ask.
pub struct StdEditApplier {
    fs: Box<dyn FsAdapter>,
}

impl StdEditApplier {
    /// Creates an applier over the standard file system.
    pub fn new() -> Self {
        Self::with_fs(Box::new(StdFsAdapter::new()))
    }

    /// Creates an applier over an explicit file system adapter.
    pub fn with_fs(fs: Box<dyn FsAdapter>) -> Self {
        Self { fs }
    }
}

impl Default for StdEditApplier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StdEditApplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdEditApplier").finish_non_exhaustive()
    }
}

impl EditApplier for StdEditApplier {
    fn apply(&self, edit: &EditSet) -> Result<()> {
        for entry in &edit.entries {
            if entry.needs_confirmation {
                warn!("overwriting existing file: {}", entry.target.display());
            }
            debug!("applying {}", entry.target.display());
            self.fs
                .write(&entry.target, &entry.content)
                .map_err(|e| ScaffoldError::ApplyFailed(e.to_string()))?;
        }
        info!("applied {} file(s)", edit.len());
        Ok(())
    }
}
