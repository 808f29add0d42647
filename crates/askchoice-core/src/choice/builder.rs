//! Request building and structural validation

use std::collections::HashSet;

use tracing::debug;

use super::error::ChoiceError;
use super::raw::{RawChoiceInput, RawOption, RawQuestion};
use super::tagged::parse_tagged;
use super::types::{ChoiceOption, ChoiceRequest, Question};
use crate::config::ChoiceSettings;

/// Builds a validated [`ChoiceRequest`] from raw tool parameters
///
/// Checks run question by question and stop at the first failure:
/// id, prompt, option count, then each option's id and label.
/// Id uniqueness is only checked when `enforce_unique_ids` is set.
#[derive(Debug, Clone, Default)]
pub struct ChoiceRequestBuilder {
    enforce_unique_ids: bool,
}

impl ChoiceRequestBuilder {
    /// Create a permissive builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from configuration
    pub fn from_settings(settings: &ChoiceSettings) -> Self {
        Self {
            enforce_unique_ids: settings.enforce_unique_ids,
        }
    }

    /// Reject duplicate question ids and duplicate option ids within a question
    pub fn with_unique_ids(mut self, enforce: bool) -> Self {
        self.enforce_unique_ids = enforce;
        self
    }

    /// Build from a JSON value (tool arguments or a parsed tag tree)
    pub fn build_from_value(&self, value: &serde_json::Value) -> Result<ChoiceRequest, ChoiceError> {
        let raw: RawChoiceInput = serde_json::from_value(value.clone())
            .map_err(|e| ChoiceError::Malformed(e.to_string()))?;
        self.build(raw)
    }

    /// Build from parameter text: JSON, or tagged text starting with `<`
    pub fn build_from_text(&self, text: &str) -> Result<ChoiceRequest, ChoiceError> {
        self.build_from_value(&parse_parameters(text)?)
    }

    /// Build from already-deserialized raw input
    pub fn build(&self, mut raw: RawChoiceInput) -> Result<ChoiceRequest, ChoiceError> {
        let question_nodes = raw.question_nodes()?;
        if question_nodes.is_empty() {
            return Err(ChoiceError::MissingQuestions);
        }

        let mut questions = Vec::with_capacity(question_nodes.len());
        let mut seen_ids = HashSet::new();

        for (idx, node) in question_nodes.into_iter().enumerate() {
            let position = idx + 1;
            let raw_question = RawQuestion::from_node(position, node)?;
            let question = self.build_question(position, raw_question)?;
            if self.enforce_unique_ids && !seen_ids.insert(question.id.clone()) {
                return Err(ChoiceError::DuplicateQuestionId {
                    question_id: question.id,
                });
            }
            questions.push(question);
        }

        let request = ChoiceRequest {
            title: raw.title(),
            questions,
        };
        debug!(
            questions = request.questions.len(),
            title = request.title.as_deref().unwrap_or(""),
            "built choice request"
        );
        Ok(request)
    }

    fn build_question(
        &self,
        position: usize,
        mut raw: RawQuestion,
    ) -> Result<Question, ChoiceError> {
        let id = raw
            .id()
            .ok_or(ChoiceError::MissingQuestionId { position })?;

        let prompt = raw.prompt().ok_or_else(|| ChoiceError::MissingPrompt {
            question_id: id.clone(),
        })?;

        let option_nodes = raw.option_nodes(&id)?;
        if option_nodes.len() < 2 {
            return Err(ChoiceError::InsufficientOptions {
                question_id: id,
                found: option_nodes.len(),
            });
        }

        let mut options = Vec::with_capacity(option_nodes.len());
        let mut seen_ids = HashSet::new();
        for (idx, node) in option_nodes.into_iter().enumerate() {
            let position = idx + 1;
            let raw_option = RawOption::from_node(&id, position, node)?;
            let option = build_option(&id, position, raw_option)?;
            if self.enforce_unique_ids && !seen_ids.insert(option.id.clone()) {
                return Err(ChoiceError::DuplicateOptionId {
                    question_id: id,
                    option_id: option.id,
                });
            }
            options.push(option);
        }

        Ok(Question {
            id,
            prompt,
            options,
            allow_multiple: raw.allow_multiple(),
        })
    }
}

/// Parse parameter text into the JSON tree the builder accepts
pub fn parse_parameters(text: &str) -> Result<serde_json::Value, ChoiceError> {
    if text.trim_start().starts_with('<') {
        parse_tagged(text)
    } else {
        serde_json::from_str(text).map_err(|e| ChoiceError::Malformed(e.to_string()))
    }
}

fn build_option(
    question_id: &str,
    position: usize,
    raw: RawOption,
) -> Result<ChoiceOption, ChoiceError> {
    let id = raw.id().ok_or_else(|| ChoiceError::MissingOptionId {
            question_id: question_id.to_string(),
            position,
        })?;

    let label = raw.label().ok_or_else(|| ChoiceError::MissingOptionLabel {
        question_id: question_id.to_string(),
        option_id: id.clone(),
    })?;

    Ok(ChoiceOption { id, label })
}
