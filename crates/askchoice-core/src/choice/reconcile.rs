//! Mapping a response back onto the request's option labels

use serde::Serialize;

use super::types::{ChoiceResponse, Question};

/// Placeholder emitted for a question with nothing selected
pub const NO_SELECTION: &str = "No selection";

/// Fixed acknowledgement returned when the operator skipped
pub const SKIPPED_ACKNOWLEDGEMENT: &str =
    "<answers skipped=\"true\">The user declined to answer these questions.</answers>";

/// Resolved selection for one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub question_id: String,
    /// Comma-separated labels, or [`NO_SELECTION`]
    pub selected: String,
    /// At least one option id was selected
    pub answered: bool,
}

impl AnswerRecord {
    pub fn is_answered(&self) -> bool {
        self.answered
    }
}

/// Outcome of reconciling a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "answers", rename_all = "snake_case")]
pub enum Reconciled {
    Skipped,
    Answered(Vec<AnswerRecord>),
}

impl Reconciled {
    /// Render the text handed back to the caller
    pub fn to_wire(&self) -> String {
        match self {
            Self::Skipped => SKIPPED_ACKNOWLEDGEMENT.to_string(),
            Self::Answered(records) => {
                let mut out = String::from("<answers>\n");
                for record in records {
                    out.push_str(&format!(
                        "<answer><question_id>{}</question_id><selected_options>{}</selected_options></answer>\n",
                        record.question_id, record.selected
                    ));
                }
                out.push_str("</answers>");
                out
            }
        }
    }

    pub fn records(&self) -> &[AnswerRecord] {
        match self {
            Self::Answered(records) => records,
            Self::Skipped => &[],
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// Number of questions with at least one resolved selection
    pub fn answered_count(&self) -> usize {
        self.records().iter().filter(|r| r.is_answered()).count()
    }
}

/// Reconcile a response against the request's questions
///
/// Questions keep request order. Option ids missing from the request are
/// echoed as-is rather than rejected.
pub fn reconcile(questions: &[Question], response: &ChoiceResponse) -> Reconciled {
    if response.is_skipped() {
        return Reconciled::Skipped;
    }

    let records = questions
        .iter()
        .map(|question| {
            let labels: Vec<&str> = response
                .selected(&question.id)
                .iter()
                .map(|option_id| question.label_for(option_id))
                .collect();

            let answered = !labels.is_empty();
            let selected = if answered {
                labels.join(", ")
            } else {
                NO_SELECTION.to_string()
            };

            AnswerRecord {
                question_id: question.id.clone(),
                selected,
                answered,
            }
        })
        .collect();

    Reconciled::Answered(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::types::ChoiceOption;

    fn questions() -> Vec<Question> {
        vec![
            Question::new(
                "q1",
                "Colors?",
                vec![
                    ChoiceOption::new("o1", "Red"),
                    ChoiceOption::new("o2", "Blue"),
                    ChoiceOption::new("o3", "Green"),
                ],
            )
            .with_allow_multiple(),
            Question::new(
                "q2",
                "Size?",
                vec![ChoiceOption::new("s", "Small"), ChoiceOption::new("l", "Large")],
            ),
        ]
    }

    #[test]
    fn test_labels_joined_and_missing_question_gets_placeholder() {
        let response = ChoiceResponse::answered([("q1", vec!["o1", "o2"])]);
        let reconciled = reconcile(&questions(), &response);

        assert_eq!(
            reconciled.records(),
            [
                AnswerRecord {
                    question_id: "q1".into(),
                    selected: "Red, Blue".into(),
                    answered: true,
                },
                AnswerRecord {
                    question_id: "q2".into(),
                    selected: NO_SELECTION.into(),
                    answered: false,
                },
            ]
        );
        assert_eq!(reconciled.answered_count(), 1);
    }

    #[test]
    fn test_skip_ignores_questions() {
        assert_eq!(
            reconcile(&questions(), &ChoiceResponse::Skipped).to_wire(),
            SKIPPED_ACKNOWLEDGEMENT
        );
        assert_eq!(
            reconcile(&questions()[..1], &ChoiceResponse::Skipped).to_wire(),
            SKIPPED_ACKNOWLEDGEMENT
        );
    }

    #[test]
    fn test_unknown_option_echoes_raw_id() {
        let response = ChoiceResponse::answered([("q2", vec!["xl"])]);
        let reconciled = reconcile(&questions(), &response);
        assert_eq!(reconciled.records()[1].selected, "xl");
    }

    #[test]
    fn test_selection_order_follows_response() {
        let response = ChoiceResponse::answered([("q1", vec!["o3", "o1"])]);
        let reconciled = reconcile(&questions(), &response);
        assert_eq!(reconciled.records()[0].selected, "Green, Red");
    }

    #[test]
    fn test_responses_for_unknown_questions_are_ignored() {
        let response = ChoiceResponse::answered([("nope", vec!["o1"])]);
        let reconciled = reconcile(&questions(), &response);
        assert_eq!(reconciled.records().len(), 2);
        assert_eq!(reconciled.answered_count(), 0);
    }

    #[test]
    fn test_option_labelled_like_placeholder_counts_as_answered() {
        let questions = vec![Question::new(
            "notify",
            "Notifications?",
            vec![
                ChoiceOption::new("none", NO_SELECTION),
                ChoiceOption::new("email", "Email"),
            ],
        )];
        let response = ChoiceResponse::answered([("notify", vec!["none"])]);
        let reconciled = reconcile(&questions, &response);
        assert_eq!(reconciled.records()[0].selected, NO_SELECTION);
        assert!(reconciled.records()[0].is_answered());
        assert_eq!(reconciled.answered_count(), 1);
    }

    #[test]
    fn test_wire_format() {
        let response = ChoiceResponse::answered([("q2", vec!["l"])]);
        let wire = reconcile(&questions(), &response).to_wire();
        assert_eq!(
            wire,
            "<answers>\n\
             <answer><question_id>q1</question_id><selected_options>No selection</selected_options></answer>\n\
             <answer><question_id>q2</question_id><selected_options>Large</selected_options></answer>\n\
             </answers>"
        );
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let response = ChoiceResponse::answered([("q1", vec!["o2"]), ("q2", vec!["s"])]);
        let first = reconcile(&questions(), &response).to_wire();
        let second = reconcile(&questions(), &response).to_wire();
        assert_eq!(first, second);
    }
}
