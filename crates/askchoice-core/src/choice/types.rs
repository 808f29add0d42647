//! Core data types for choice requests and responses

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selected option ids keyed by question id
pub type Selections = BTreeMap<String, Vec<String>>;

/// A validated set of questions to present to the operator
///
/// Built once per tool invocation by [`ChoiceRequestBuilder`](super::ChoiceRequestBuilder)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRequest {
    /// Optional display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Questions in display order (never empty)
    pub questions: Vec<Question>,
}

impl ChoiceRequest {
    /// Look up a question by id
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the request has no questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A single question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Slug used to join the request with the response
    pub id: String,
    /// Human-readable question text
    pub prompt: String,
    /// Options in declaration order (at least two)
    pub options: Vec<ChoiceOption>,
    /// Checkbox semantics when true, radio semantics otherwise
    #[serde(default)]
    pub allow_multiple: bool,
}

impl Question {
    /// Create a single-select question
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
            allow_multiple: false,
        }
    }

    /// Enable multi-select
    pub fn with_allow_multiple(mut self) -> Self {
        self.allow_multiple = true;
        self
    }

    /// Look up an option by id
    pub fn option(&self, id: &str) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Label for an option id, falling back to the id itself when unknown
    pub fn label_for<'a>(&'a self, option_id: &'a str) -> &'a str {
        self.option(option_id)
            .map(|o| o.label.as_str())
            .unwrap_or(option_id)
    }
}

/// One selectable option of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Slug, unique within its question
    pub id: String,
    /// Display text
    pub label: String,
}

impl ChoiceOption {
    /// Create a new option
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// The operator's answer to a [`ChoiceRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceResponse {
    /// Selections keyed by question id; keys need not cover every question
    Answered(Selections),
    /// The operator declined to answer
    Skipped,
}

impl ChoiceResponse {
    /// Build an answered response from `(question_id, option_ids)` pairs
    pub fn answered<I, Q, O>(selections: I) -> Self
    where
        I: IntoIterator<Item = (Q, Vec<O>)>,
        Q: Into<String>,
        O: Into<String>,
    {
        Self::Answered(
            selections
                .into_iter()
                .map(|(q, opts)| (q.into(), opts.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }

    /// An answered response with no selections at all
    pub fn empty() -> Self {
        Self::Answered(Selections::new())
    }

    /// Check if the operator skipped
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// Selections for a question (empty when absent or skipped)
    pub fn selected(&self, question_id: &str) -> &[String] {
        match self {
            Self::Answered(selections) => selections
                .get(question_id)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            Self::Skipped => &[],
        }
    }
}
