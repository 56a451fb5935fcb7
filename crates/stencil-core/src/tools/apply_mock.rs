//! Mock edit applier for testing.

use crate::edit::EditSet;
use crate::error::{Result, ScaffoldError};
use crate::tools::apply::EditApplier;
use std::sync::{Arc, Mutex};

/// Mock edit applier recording every applied set.
///
/// Can be scripted to fail, to exercise the fatal `ApplyFailed` path.
#[derive(Debug, Clone, Default)]
pub struct MockEditApplier {
    /// Applied edit sets, in order.
    applied: Arc<Mutex<Vec<EditSet>>>,
    /// Failure message to return instead of applying.
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockEditApplier {
    /// Creates a new mock applier that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent apply fail with the given message.
    #[must_use]
    pub fn failing(self, message: impl Into<String>) -> Self {
        *self.fail_with.lock().unwrap() = Some(message.into());
        self
    }

    /// Returns the applied edit sets, in order.
    pub fn applied(&self) -> Vec<EditSet> {
        self.applied.lock().unwrap().clone()
    }
}

impl EditApplier for MockEditApplier {
    fn apply(&self, edit: &EditSet) -> Result<()> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(ScaffoldError::ApplyFailed(message));
        }
        self.applied.lock().unwrap().push(edit.clone());
        Ok(())
    }
}
