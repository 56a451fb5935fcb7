//! Selection wizard state machine.
//!
//! The wizard walks a user through template selection and item-name capture.
//! Control flow is an explicit state machine - SelectTemplate, CaptureValues,
//! Done, Cancelled - driven by results from a [`WizardPrompter`], the seam to
//! whatever UI the host provides. Back navigation from the capture step
//! discards that step's state and re-enters selection; cancellation at any
//! step terminates with no side effects. A completed wizard always carries
//! its selection, so "finished without a selection" is unrepresentable.

use crate::catalog::Candidate;
use crate::schema::Template;

/// Result of one item-name capture step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemNameOutcome {
    /// A name was entered.
    Value(String),

    /// The user navigated back to template selection.
    Back,

    /// The user cancelled the wizard.
    Cancel,
}

/// UI seam for the wizard.
///
/// Implementations present the candidate list and capture the item name; the
/// state machine owns ordering, validation, and back/cancel handling.
pub trait WizardPrompter {
    /// Presents the candidates and returns the index of the selection, or
    /// `None` when the user cancels. A returned index must be within the
    /// candidate slice; anything else is a bug in the implementation.
    fn pick_template(&self, candidates: &[Candidate]) -> Option<usize>;

    /// Captures an item name for the selected template.
    ///
    /// `default` is the template's suggested name (possibly empty), and
    /// `error` carries the validation message when the previous attempt was
    /// rejected.
    fn capture_item_name(
        &self,
        template: &Template,
        default: &str,
        error: Option<&str>,
    ) -> ItemNameOutcome;
}

/// A completed wizard run: which candidate was chosen and the captured
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSelection {
    /// Index into the candidate slice passed to [`run_wizard`].
    pub candidate_index: usize,

    /// Validated item name.
    pub item_name: String,
}

enum WizardState {
    SelectTemplate,
    CaptureValues {
        selection: usize,
        error: Option<&'static str>,
    },
    Done {
        selection: usize,
        item_name: String,
    },
    Cancelled,
}

/// Runs the wizard over the given candidates.
///
/// Candidates are presented in slice order; callers sort by display name
/// beforehand. Returns `None` when the user cancels at any step - a normal,
/// silent termination, not an error.
///
/// # Panics
///
/// Panics when the prompter returns a selection index outside the candidate
/// slice. That is a prompter bug, not a user action, and must not be
/// mistaken for cancellation.
pub fn run_wizard(prompter: &dyn WizardPrompter, candidates: &[Candidate]) -> Option<WizardSelection> {
    let mut state = WizardState::SelectTemplate;

    loop {
        state = match state {
            WizardState::SelectTemplate => match prompter.pick_template(candidates) {
                Some(selection) if selection < candidates.len() => WizardState::CaptureValues {
                    selection,
                    error: None,
                },
                Some(selection) => panic!(
                    "prompter returned out-of-range selection {selection} for {} candidate(s) (bug)",
                    candidates.len()
                ),
                None => WizardState::Cancelled,
            },

            WizardState::CaptureValues { selection, error } => {
                let template = &candidates[selection].template;
                let default = template.default_item_name.as_deref().unwrap_or("");
                match prompter.capture_item_name(template, default, error) {
                    ItemNameOutcome::Cancel => WizardState::Cancelled,
                    ItemNameOutcome::Back => WizardState::SelectTemplate,
                    ItemNameOutcome::Value(value) => match validate_item_name(&value) {
                        Some(message) => WizardState::CaptureValues {
                            selection,
                            error: Some(message),
                        },
                        None => WizardState::Done {
                            selection,
                            item_name: value,
                        },
                    },
                }
            }

            WizardState::Done {
                selection,
                item_name,
            } => {
                return Some(WizardSelection {
                    candidate_index: selection,
                    item_name,
                });
            }

            WizardState::Cancelled => return None,
        };
    }
}

/// Validates a candidate item name.
///
/// Returns a user-facing message when the name is rejected, `None` when it
/// is acceptable.
pub fn validate_item_name(input: &str) -> Option<&'static str> {
    if input.is_empty() {
        return Some("Item name cannot be empty");
    }

    if input.contains('/') || input.contains('\\') {
        return Some("Item name cannot include path separators");
    }

    None
}

/// Scripted wizard prompter for testing.
///
/// Returns picks and item-name outcomes in the order they were queued and
/// records the validation errors it was shown.
#[derive(Debug, Default)]
pub struct MockWizardPrompter {
    picks: std::sync::Mutex<std::collections::VecDeque<Option<usize>>>,
    names: std::sync::Mutex<std::collections::VecDeque<ItemNameOutcome>>,
    errors_seen: std::sync::Mutex<Vec<String>>,
    defaults_seen: std::sync::Mutex<Vec<String>>,
}

impl MockWizardPrompter {
    /// Creates a prompter with no scripted steps (everything cancels).
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a template pick result.
    #[must_use]
    pub fn then_pick(self, pick: Option<usize>) -> Self {
        self.picks.lock().unwrap().push_back(pick);
        self
    }

    /// Queues an item-name outcome.
    #[must_use]
    pub fn then_name(self, outcome: ItemNameOutcome) -> Self {
        self.names.lock().unwrap().push_back(outcome);
        self
    }

    /// Validation messages shown to the user, in order.
    pub fn errors_seen(&self) -> Vec<String> {
        self.errors_seen.lock().unwrap().clone()
    }

    /// Default item names offered, in order.
    pub fn defaults_seen(&self) -> Vec<String> {
        self.defaults_seen.lock().unwrap().clone()
    }
}

impl WizardPrompter for MockWizardPrompter {
    fn pick_template(&self, _candidates: &[Candidate]) -> Option<usize> {
        self.picks.lock().unwrap().pop_front().flatten()
    }

    fn capture_item_name(
        &self,
        _template: &Template,
        default: &str,
        error: Option<&str>,
    ) -> ItemNameOutcome {
        self.defaults_seen.lock().unwrap().push(default.to_string());
        if let Some(message) = error {
            self.errors_seen.lock().unwrap().push(message.to_string());
        }
        self.names
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(ItemNameOutcome::Cancel)
    }
}
