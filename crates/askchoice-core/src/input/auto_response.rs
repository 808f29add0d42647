//! Auto-response strategies for non-interactive mode

use std::sync::Arc;

use super::request::InputRequest;
use super::response::InputResponse;
use crate::choice::ChoiceResponse;
use crate::config::AutoResponseMode;

/// Auto-responder function type
pub type AutoResponder = Box<dyn Fn(&InputRequest) -> InputResponse + Send + Sync>;

/// Auto-response strategies for non-interactive mode
#[derive(Clone)]
pub enum AutoResponse {
    /// Submit with nothing selected
    Default,
    /// Pick the first option of every question
    FirstOption,
    /// Skip every request
    AlwaysSkip,
    /// Cancel every request
    AlwaysCancel,
    /// Custom responder function
    Custom(Arc<dyn Fn(&InputRequest) -> InputResponse + Send + Sync>),
}

impl std::fmt::Debug for AutoResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AutoResponse::Default => write!(f, "AutoResponse::Default"),
            AutoResponse::FirstOption => write!(f, "AutoResponse::FirstOption"),
            AutoResponse::AlwaysSkip => write!(f, "AutoResponse::AlwaysSkip"),
            AutoResponse::AlwaysCancel => write!(f, "AutoResponse::AlwaysCancel"),
            AutoResponse::Custom(_) => write!(f, "AutoResponse::Custom(...)"),
        }
    }
}

impl From<AutoResponseMode> for AutoResponse {
    fn from(mode: AutoResponseMode) -> Self {
        match mode {
            AutoResponseMode::Default => AutoResponse::Default,
            AutoResponseMode::FirstOption => AutoResponse::FirstOption,
            AutoResponseMode::AlwaysSkip => AutoResponse::AlwaysSkip,
            AutoResponseMode::AlwaysCancel => AutoResponse::AlwaysCancel,
        }
    }
}

impl AutoResponse {
    /// Convert to a responder function
    pub fn into_responder(self) -> AutoResponder {
        match self {
            AutoResponse::Default => Box::new(|req: &InputRequest| {
                InputResponse::from_choice(req.id, &ChoiceResponse::empty())
            }),
            AutoResponse::FirstOption => Box::new(|req: &InputRequest| {
                let response = ChoiceResponse::answered(req.request.questions.iter().filter_map(
                    |q| q.options.first().map(|o| (q.id.clone(), vec![o.id.clone()])),
                ));
                InputResponse::from_choice(req.id, &response)
            }),
            AutoResponse::AlwaysSkip => Box::new(|req: &InputRequest| InputResponse::skipped(req.id)),
            AutoResponse::AlwaysCancel => {
                Box::new(|req: &InputRequest| InputResponse::cancelled(req.id))
            }
            AutoResponse::Custom(f) => Box::new(move |req: &InputRequest| f(req)),
        }
    }
}
