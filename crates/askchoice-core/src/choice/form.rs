//! Selection state held by a presenter while a request is on screen

use serde::Serialize;
use tracing::debug;

use super::types::{ChoiceRequest, ChoiceResponse, Selections};

/// Lifecycle of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormState {
    Editing,
    Submitted,
    Skipped,
}

impl FormState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Editing)
    }
}

/// Per-question selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuestionState {
    Unanswered,
    /// Multi-select only: some, but not all, options chosen
    PartiallySelected,
    Selected,
}

/// The terminal action the operator took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormAction {
    Confirm,
    Skip,
}

/// Effect of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Option added to the selection
    Selected,
    /// Option removed (multi-select)
    Deselected,
    /// Previous single-select choice replaced
    Replaced,
    /// Form is terminal, or the question/option is unknown
    Ignored,
}

/// Mutable selection state for one [`ChoiceRequest`]
///
/// Confirm is always allowed, even with unanswered questions; the
/// answered/total counter is advisory. After confirm or skip every toggle is
/// ignored.
#[derive(Debug, Clone)]
pub struct ChoiceForm {
    request: ChoiceRequest,
    selections: Selections,
    state: FormState,
}

impl ChoiceForm {
    pub fn new(request: ChoiceRequest) -> Self {
        Self {
            request,
            selections: Selections::new(),
            state: FormState::Editing,
        }
    }

    pub fn request(&self) -> &ChoiceRequest {
        &self.request
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// The action that ended the form, if it has ended
    pub fn chosen_action(&self) -> Option<FormAction> {
        match self.state {
            FormState::Editing => None,
            FormState::Submitted => Some(FormAction::Confirm),
            FormState::Skipped => Some(FormAction::Skip),
        }
    }

    /// Whether option controls still react to input
    pub fn is_interactive(&self) -> bool {
        self.state == FormState::Editing
    }

    /// Toggle an option of a question
    ///
    /// Single-select replaces the previous choice. Multi-select adds the
    /// option, or removes it if already chosen, keeping insertion order.
    pub fn toggle(&mut self, question_id: &str, option_id: &str) -> ToggleOutcome {
        if self.state.is_terminal() {
            debug!(question_id, option_id, state = ?self.state, "toggle ignored on closed form");
            return ToggleOutcome::Ignored;
        }
        let Some(question) = self.request.question(question_id) else {
            debug!(question_id, "toggle ignored for unknown question");
            return ToggleOutcome::Ignored;
        };
        if question.option(option_id).is_none() {
            debug!(question_id, option_id, "toggle ignored for unknown option");
            return ToggleOutcome::Ignored;
        }
        let allow_multiple = question.allow_multiple;

        let selected = self.selections.entry(question_id.to_string()).or_default();
        if allow_multiple {
            if let Some(pos) = selected.iter().position(|id| id == option_id) {
                selected.remove(pos);
                if selected.is_empty() {
                    self.selections.remove(question_id);
                }
                ToggleOutcome::Deselected
            } else {
                selected.push(option_id.to_string());
                ToggleOutcome::Selected
            }
        } else {
            let replaced = !selected.is_empty();
            selected.clear();
            selected.push(option_id.to_string());
            if replaced {
                ToggleOutcome::Replaced
            } else {
                ToggleOutcome::Selected
            }
        }
    }

    /// Option ids currently chosen for a question, in selection order
    pub fn selected(&self, question_id: &str) -> &[String] {
        self.selections
            .get(question_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_selected(&self, question_id: &str, option_id: &str) -> bool {
        self.selected(question_id).iter().any(|id| id == option_id)
    }

    pub fn question_state(&self, question_id: &str) -> QuestionState {
        let count = self.selected(question_id).len();
        let Some(question) = self.request.question(question_id) else {
            return QuestionState::Unanswered;
        };
        match count {
            0 => QuestionState::Unanswered,
            n if question.allow_multiple && n < question.options.len() => {
                QuestionState::PartiallySelected
            }
            _ => QuestionState::Selected,
        }
    }

    /// Questions with at least one option chosen
    pub fn answered_count(&self) -> usize {
        self.request
            .questions
            .iter()
            .filter(|q| self.question_state(&q.id) != QuestionState::Unanswered)
            .count()
    }

    pub fn total(&self) -> usize {
        self.request.questions.len()
    }

    /// `answered/total` counter for display
    pub fn progress(&self) -> String {
        format!("{}/{}", self.answered_count(), self.total())
    }

    /// Confirm the current selections
    ///
    /// Returns `None` if the form already ended.
    pub fn submit(&mut self) -> Option<ChoiceResponse> {
        if self.state.is_terminal() {
            return None;
        }
        self.state = FormState::Submitted;
        debug!(answered = self.answered_count(), total = self.total(), "choice form submitted");
        Some(ChoiceResponse::Answered(self.selections.clone()))
    }

    /// Decline to answer; selections are discarded from the response
    ///
    /// Returns `None` if the form already ended.
    pub fn skip(&mut self) -> Option<ChoiceResponse> {
        if self.state.is_terminal() {
            return None;
        }
        self.state = FormState::Skipped;
        debug!("choice form skipped");
        Some(ChoiceResponse::Skipped)
    }
}
