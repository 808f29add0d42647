//! Multiple-choice question protocol
//!
//! The protocol has a producer side and a consumer side:
//!
//! - [`ChoiceRequestBuilder`] turns raw tool parameters (JSON, or XML-style
//!   tagged text via [`parse_tagged`]) into a validated [`ChoiceRequest`]
//! - [`ChoiceForm`] holds the operator's selections while the request is shown
//! - [`reconcile`] maps a [`ChoiceResponse`] back onto option labels and
//!   renders the `<answers>` block returned to the caller
//!
//! # Example
//!
//! ```rust
//! use askchoice_core::choice::{ChoiceRequestBuilder, ChoiceResponse, reconcile};
//! use serde_json::json;
//!
//! let request = ChoiceRequestBuilder::new()
//!     .build_from_value(&json!({
//!         "question": {
//!             "id": "framework",
//!             "prompt": "Pick one",
//!             "options": [
//!                 {"id": "react", "label": "React"},
//!                 {"id": "vue", "label": "Vue.js"}
//!             ]
//!         }
//!     }))
//!     .unwrap();
//!
//! let response = ChoiceResponse::answered([("framework", vec!["vue"])]);
//! let reconciled = reconcile(&request.questions, &response);
//! assert!(reconciled.to_wire().contains("Vue.js"));
//! ```

mod builder;
mod error;
mod form;
mod raw;
mod reconcile;
mod response;
mod tagged;
mod types;

pub use builder::{ChoiceRequestBuilder, parse_parameters};
pub use error::{ChoiceError, ResponseParseError};
pub use form::{ChoiceForm, FormAction, FormState, QuestionState, ToggleOutcome};
pub use raw::{OneOrMany, RawChoiceInput, RawOption, RawQuestion, scalar_text};
pub use reconcile::{AnswerRecord, NO_SELECTION, Reconciled, SKIPPED_ACKNOWLEDGEMENT, reconcile};
pub use response::{ParsedResponse, SKIP_SENTINEL, parse_response_payload};
pub use tagged::parse_tagged;
pub use types::{ChoiceOption, ChoiceRequest, ChoiceResponse, Question, Selections};
