//! Mock command evaluator for testing.
//!
//! Returns scripted results and records how many times each command was
//! evaluated, which is how the at-most-once caching guarantee of the resolver
//! is asserted in tests.

use crate::command::CommandEvaluator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock command evaluator with scripted results and invocation counting.
///
/// # Examples
///
/// ```
/// use stencil_vars::MockCommandEvaluator;
///
/// let commands = MockCommandEvaluator::new().with_result("git user", "alice");
/// assert_eq!(commands.call_count("git user"), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCommandEvaluator {
    /// Scripted command results (command -> value).
    results: Arc<Mutex<HashMap<String, String>>>,
    /// Invocation counts per command.
    calls: Arc<Mutex<HashMap<String, usize>>>,
}

impl MockCommandEvaluator {
    /// Creates a new mock evaluator with no scripted results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scripted result for a command.
    #[must_use]
    pub fn with_result(self, command: impl Into<String>, value: impl Into<String>) -> Self {
        self.results
            .lock()
            .unwrap()
            .insert(command.into(), value.into());
        self
    }

    /// Returns how many times the given command has been evaluated.
    pub fn call_count(&self, command: &str) -> usize {
        self.calls.lock().unwrap().get(command).copied().unwrap_or(0)
    }

    /// Returns the total number of evaluations across all commands.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl CommandEvaluator for MockCommandEvaluator {
    async fn eval(&self, command: &str) -> Option<String> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(command.to_string())
            .or_insert(0) += 1;
        self.results.lock().unwrap().get(command).cloned()
    }
}
