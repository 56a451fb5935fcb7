//! Command evaluator trait and the standard shell-backed implementation.
//!
//! `${command:...}` placeholders resolve through the [`CommandEvaluator`]
//! trait, the host-extensibility point of the resolver. Implementations can
//! run real commands or provide scripted behavior for testing.

use async_trait::async_trait;
use tracing::warn;

/// Evaluates `${command:...}` placeholders.
///
/// Evaluation is an async suspension point: the resolver awaits one result
/// before continuing. A `None` result leaves the placeholder unresolved, and
/// the resolver passes it through verbatim; evaluators are expected to
/// swallow their own failures and report them through logging.
#[async_trait]
pub trait CommandEvaluator: Send + Sync {
    /// Evaluates a command and returns its result as a string.
    ///
    /// # Arguments
    ///
    /// * `command` - Command text as it appeared after the `command:` prefix.
    ///
    /// # Returns
    ///
    /// `Some(value)` with a non-empty result, or `None` when the command is
    /// missing, fails, or produces no output.
    async fn eval(&self, command: &str) -> Option<String>;
}

/// Standard command evaluator running commands through the platform shell.
///
/// Uses `sh -c` on Unix and `cmd /C` on Windows. Spawn failures and non-zero
/// exits are logged at warn level and mapped to `None` so a broken command
/// never aborts a scaffold operation.
#[derive(Debug, Default)]
pub struct ShellCommandEvaluator;

impl ShellCommandEvaluator {
    /// Creates a new shell command evaluator.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandEvaluator for ShellCommandEvaluator {
    async fn eval(&self, command: &str) -> Option<String> {
        #[cfg(unix)]
        let (shell, shell_arg) = ("sh", "-c");
        #[cfg(windows)]
        let (shell, shell_arg) = ("cmd", "/C");

        let output = match tokio::process::Command::new(shell)
            .arg(shell_arg)
            .arg(command)
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                warn!("command placeholder failed to execute: {}: {}", command, e);
                return None;
            }
        };

        if !output.status.success() {
            warn!(
                "command placeholder exited with {}: {}",
                output.status, command
            );
            return None;
        }

        let value = String::from_utf8_lossy(&output.stdout)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        if value.is_empty() { None } else { Some(value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_eval_simple_command() {
        let evaluator = ShellCommandEvaluator::new();
        let value = evaluator.eval("echo hello").await;

        assert_eq!(value, Some("hello".to_string()));
    }

    #[tokio::test]
    async fn test_eval_failing_command_is_unresolved() {
        let evaluator = ShellCommandEvaluator::new();

        assert_eq!(evaluator.eval("exit 1").await, None);
    }

    #[tokio::test]
    async fn test_eval_empty_output_is_unresolved() {
        let evaluator = ShellCommandEvaluator::new();

        assert_eq!(evaluator.eval("true").await, None);
    }
}
