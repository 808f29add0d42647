//! Response payload encoding and lenient parsing
//!
//! A presenter answers with a payload string: either [`SKIP_SENTINEL`] or a
//! JSON object mapping question ids to selected option ids. A bare string is
//! accepted where a list is expected.

use std::collections::BTreeMap;

use tracing::warn;

use super::error::ResponseParseError;
use super::raw::OneOrMany;
use super::types::{ChoiceResponse, Selections};

/// Payload sent by a presenter when the operator skipped
pub const SKIP_SENTINEL: &str = "__skipped__";

/// A parsed payload plus the diagnostic raised while parsing it, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    pub response: ChoiceResponse,
    pub diagnostic: Option<ResponseParseError>,
}

/// Parse a presenter payload
///
/// Malformed payloads never fail: they become an empty response with a
/// diagnostic attached.
pub fn parse_response_payload(payload: &str) -> ParsedResponse {
    let trimmed = payload.trim();
    if is_skip(trimmed) {
        return ParsedResponse {
            response: ChoiceResponse::Skipped,
            diagnostic: None,
        };
    }

    match serde_json::from_str::<BTreeMap<String, OneOrMany<String>>>(trimmed) {
        Ok(map) => ParsedResponse {
            response: ChoiceResponse::Answered(
                map.into_iter()
                    .map(|(question_id, selected)| (question_id, selected.into_vec()))
                    .collect(),
            ),
            diagnostic: None,
        },
        Err(e) => {
            let diagnostic = ResponseParseError::new(e.to_string(), payload);
            warn!(reason = %diagnostic.reason, "malformed choice response payload");
            ParsedResponse {
                response: ChoiceResponse::empty(),
                diagnostic: Some(diagnostic),
            }
        }
    }
}

fn is_skip(trimmed: &str) -> bool {
    trimmed == SKIP_SENTINEL
        || serde_json::from_str::<String>(trimmed).is_ok_and(|s| s == SKIP_SENTINEL)
}

impl ChoiceResponse {
    /// Encode as a presenter payload
    pub fn to_payload(&self) -> String {
        match self {
            Self::Skipped => SKIP_SENTINEL.to_string(),
            Self::Answered(selections) => {
                serde_json::to_string(selections).unwrap_or_else(|_| "{}".to_string())
            }
        }
    }

    /// Parse a presenter payload, see [`parse_response_payload`]
    pub fn from_payload(payload: &str) -> ParsedResponse {
        parse_response_payload(payload)
    }
}

impl From<Selections> for ChoiceResponse {
    fn from(selections: Selections) -> Self {
        Self::Answered(selections)
    }
}
