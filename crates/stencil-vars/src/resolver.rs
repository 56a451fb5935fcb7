//! Placeholder resolution over template content.
//!
//! Content is scanned for `${...}` tokens and substituted in two passes:
//! every distinct literal placeholder text is resolved exactly once into a
//! per-call cache, then all occurrences are replaced from the cache. Repeated
//! placeholders therefore receive identical values within one document even
//! when resolution is non-deterministic, and `${command:...}` side effects
//! happen at most once per distinct text per call.
//!
//! Resolution precedence per placeholder:
//!
//! 1. `${env:NAME}` - environment variable lookup.
//! 2. `${command:CMD}` - async evaluation via [`CommandEvaluator`].
//! 3. `${input:...}` - reserved for interactive prompting, always unresolved.
//! 4. Scope table lookup (file-level table falls back to template-level).
//!
//! Whatever stays unresolved is left in the output verbatim.

use crate::command::CommandEvaluator;
use crate::scope::{FileScope, TemplateScope};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::trace;

/// Non-greedy placeholder token. `.` does not cross line boundaries, so a
/// `${` left unclosed on a line never swallows the rest of the document.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{.+?\}").expect("placeholder pattern is valid"));

/// Substitutes template-level variables in `content`.
///
/// Used for target-name patterns, which are computed before any file identity
/// exists. Unresolved placeholders pass through verbatim; this function never
/// fails.
pub async fn substitute_template_level(
    scope: &TemplateScope,
    content: &str,
    commands: &dyn CommandEvaluator,
) -> String {
    substitute(content, commands, |name| scope.lookup(name)).await
}

/// Substitutes file-level variables in `content`.
///
/// Used for file contents once the source/target pair is known. The
/// file-level table is a strict superset of the template-level one.
pub async fn substitute_file_level(
    scope: &FileScope,
    content: &str,
    commands: &dyn CommandEvaluator,
) -> String {
    substitute(content, commands, |name| scope.lookup(name)).await
}

async fn substitute<F>(content: &str, commands: &dyn CommandEvaluator, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let matches: Vec<&str> = PLACEHOLDER.find_iter(content).map(|m| m.as_str()).collect();
    if matches.is_empty() {
        return content.to_string(); // Nothing to replace.
    }

    // Pass one: resolve each distinct literal text exactly once.
    let mut cache: HashMap<&str, String> = HashMap::new();
    for text in matches {
        if !cache.contains_key(text) {
            let value = resolve(text, commands, &lookup).await;
            trace!("placeholder {} -> {:?}", text, value);
            cache.insert(text, value.unwrap_or_else(|| text.to_string()));
        }
    }

    // Pass two: replace every occurrence from the cache.
    PLACEHOLDER
        .replace_all(content, |caps: &regex::Captures<'_>| {
            let text = caps.get(0).map_or("", |m| m.as_str());
            cache.get(text).cloned().unwrap_or_else(|| text.to_string())
        })
        .into_owned()
}

async fn resolve<F>(placeholder: &str, commands: &dyn CommandEvaluator, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    // Strip the `${` prefix and `}` suffix the pattern guarantees.
    let name = &placeholder[2..placeholder.len() - 1];

    if let Some(var) = name.strip_prefix("env:") {
        if var.is_empty() {
            return None;
        }
        return std::env::var(var).ok().filter(|v| !v.is_empty());
    }

    if let Some(command) = name.strip_prefix("command:") {
        // Empty results count as unresolved regardless of the evaluator.
        return commands.eval(command).await.filter(|v| !v.is_empty());
    }

    if name.starts_with("input:") {
        return None; // Reserved for interactive prompting.
    }

    lookup(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_mock::MockCommandEvaluator;

    fn template_scope() -> TemplateScope {
        TemplateScope::new("Bob", "/work/project", "project")
    }

    fn file_scope() -> FileScope {
        FileScope::new(template_scope(), "/t/a.txt", "/work/project/Bob.txt")
    }

    #[tokio::test]
    async fn test_no_placeholders_is_identity() {
        let commands = MockCommandEvaluator::new();
        let content = "plain text, no variables at all";

        let result = substitute_template_level(&template_scope(), content, &commands).await;

        assert_eq!(result, content);
        assert_eq!(commands.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_content() {
        let commands = MockCommandEvaluator::new();

        let result = substitute_template_level(&template_scope(), "", &commands).await;

        assert_eq!(result, "");
    }

    #[tokio::test]
    async fn test_simple_variables() {
        let commands = MockCommandEvaluator::new();
        let content = "Hello ${itemName}, sep=${pathSeparator}";

        let result = substitute_template_level(&template_scope(), content, &commands).await;

        assert_eq!(
            result,
            format!("Hello Bob, sep={}", std::path::MAIN_SEPARATOR_STR)
        );
    }

    #[tokio::test]
    async fn test_unknown_placeholder_passes_through_verbatim() {
        let commands = MockCommandEvaluator::new();
        let content = "keep ${totallyUnknown} and ${another one}";

        let result = substitute_template_level(&template_scope(), content, &commands).await;

        assert_eq!(result, content);
    }

    #[tokio::test]
    async fn test_file_variable_unresolved_at_template_level() {
        let commands = MockCommandEvaluator::new();

        let result = substitute_template_level(&template_scope(), "${file}", &commands).await;

        assert_eq!(result, "${file}");
    }

    #[tokio::test]
    async fn test_file_level_resolves_file_variables() {
        let commands = MockCommandEvaluator::new();
        let content = "${file}|${fileBasename}|${fileBasenameNoExtension}|${fileExtname}";

        let result = substitute_file_level(&file_scope(), content, &commands).await;

        assert_eq!(result, "/work/project/Bob.txt|Bob.txt|Bob|.txt");
    }

    #[tokio::test]
    async fn test_file_level_is_superset_of_template_level() {
        let commands = MockCommandEvaluator::new();
        let content = "${itemName} ${workspaceFolder} ${workspaceFolderBasename}";

        let template = substitute_template_level(&template_scope(), content, &commands).await;
        let file = substitute_file_level(&file_scope(), content, &commands).await;

        assert_eq!(template, file);
        assert_eq!(template, "Bob /work/project project");
    }

    #[tokio::test]
    async fn test_env_variable_set() {
        let commands = MockCommandEvaluator::new();
        // Unique name to avoid clashing with other tests in the process.
        unsafe { std::env::set_var("STENCIL_RESOLVER_TEST_SET", "resolved-value") };

        let result = substitute_template_level(
            &template_scope(),
            "value: ${env:STENCIL_RESOLVER_TEST_SET}",
            &commands,
        )
        .await;

        unsafe { std::env::remove_var("STENCIL_RESOLVER_TEST_SET") };
        assert_eq!(result, "value: resolved-value");
    }

    #[tokio::test]
    async fn test_env_variable_unset_passes_through() {
        let commands = MockCommandEvaluator::new();
        let content = "value: ${env:STENCIL_RESOLVER_TEST_UNSET}";

        let result = substitute_template_level(&template_scope(), content, &commands).await;

        assert_eq!(result, content);
    }

    #[tokio::test]
    async fn test_env_variable_empty_value_passes_through() {
        let commands = MockCommandEvaluator::new();
        unsafe { std::env::set_var("STENCIL_RESOLVER_TEST_EMPTY", "") };
        let content = "value: ${env:STENCIL_RESOLVER_TEST_EMPTY}";

        let result = substitute_template_level(&template_scope(), content, &commands).await;

        unsafe { std::env::remove_var("STENCIL_RESOLVER_TEST_EMPTY") };
        assert_eq!(result, content);
    }

    #[tokio::test]
    async fn test_env_empty_name_passes_through() {
        let commands = MockCommandEvaluator::new();

        let result = substitute_template_level(&template_scope(), "${env:}", &commands).await;

        assert_eq!(result, "${env:}");
    }

    #[tokio::test]
    async fn test_command_resolved_at_most_once_per_distinct_text() {
        let commands = MockCommandEvaluator::new().with_result("whoami", "alice");
        let content = "${command:whoami} and ${command:whoami} and ${command:whoami}";

        let result = substitute_template_level(&template_scope(), content, &commands).await;

        assert_eq!(result, "alice and alice and alice");
        assert_eq!(commands.call_count("whoami"), 1);
    }

    #[tokio::test]
    async fn test_command_cache_does_not_survive_across_calls() {
        // Command output may be time-varying; memoization is scoped to one
        // substitution call, so a second call evaluates again.
        let commands = MockCommandEvaluator::new().with_result("stamp", "X1");
        let content = "${command:stamp}";

        let first = substitute_template_level(&template_scope(), content, &commands).await;
        let second = substitute_template_level(&template_scope(), content, &commands).await;

        assert_eq!(first, "X1");
        assert_eq!(second, "X1");
        assert_eq!(commands.call_count("stamp"), 2);
    }

    #[tokio::test]
    async fn test_distinct_commands_each_resolved_once() {
        let commands = MockCommandEvaluator::new()
            .with_result("one", "1")
            .with_result("two", "2");
        let content = "${command:one}${command:two}${command:one}";

        let result = substitute_template_level(&template_scope(), content, &commands).await;

        assert_eq!(result, "121");
        assert_eq!(commands.call_count("one"), 1);
        assert_eq!(commands.call_count("two"), 1);
    }

    #[tokio::test]
    async fn test_failed_command_passes_through() {
        let commands = MockCommandEvaluator::new();
        let content = "${command:does-not-exist}";

        let result = substitute_template_level(&template_scope(), content, &commands).await;

        assert_eq!(result, content);
        assert_eq!(commands.call_count("does-not-exist"), 1);
    }

    #[tokio::test]
    async fn test_input_placeholder_reserved() {
        let commands = MockCommandEvaluator::new();
        let content = "${input:anything}";

        let result = substitute_file_level(&file_scope(), content, &commands).await;

        assert_eq!(result, content);
    }

    #[tokio::test]
    async fn test_repeated_scope_placeholder_uniform_value() {
        let commands = MockCommandEvaluator::new();
        let content = "${itemName}-${itemName}-${itemName}";

        let result = substitute_template_level(&template_scope(), content, &commands).await;

        assert_eq!(result, "Bob-Bob-Bob");
    }

    #[tokio::test]
    async fn test_unclosed_placeholder_left_alone() {
        let commands = MockCommandEvaluator::new();
        let content = "open ${itemName and nothing else";

        let result = substitute_template_level(&template_scope(), content, &commands).await;

        assert_eq!(result, content);
    }
}
