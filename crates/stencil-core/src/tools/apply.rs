//! Edit application boundary.
//!
//! The applier consumes a complete [`EditSet`] as one logical transaction.
//! No finer-grained failure reason crosses this boundary: a failed apply is
//! fatal and user-visible for the whole operation.

use crate::edit::EditSet;
use crate::error::Result;

/// Applies an edit set as one logical transaction.
///
/// Rollback is the implementation's concern: an implementation that cannot
/// undo partial work may leave earlier entries applied when a later one
/// fails, and callers must not assume all-or-nothing on error.
pub trait EditApplier: Send + Sync {
    /// Applies all entries of the edit set.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::ApplyFailed` when the transaction cannot be
    /// completed. Callers must treat this as fatal for the whole operation.
    fn apply(&self, edit: &EditSet) -> Result<()>;
}
