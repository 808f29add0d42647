//! The "show this to a human and wait" capability

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::channel::InputChannel;
use super::request::InputRequest;
use super::response::InputResponseKind;
use crate::choice::ChoiceRequest;
use crate::error::{AskError, AskResult};

/// Presents a choice request to an operator and returns their response payload
///
/// The payload is either the skip sentinel or JSON selections; it is parsed
/// leniently by the caller, so a presenter may pass through whatever the
/// front-end produced. Returning [`AskError::Cancelled`] aborts the invocation.
#[async_trait]
pub trait ChoicePresenter: Send + Sync {
    async fn present(&self, request: &ChoiceRequest) -> AskResult<String>;
}

/// [`ChoicePresenter`] backed by an [`InputChannel`]
///
/// Requests are serialized: a second invocation waits until the first one
/// has been answered.
#[derive(Debug)]
pub struct InputPresenter {
    channel: Mutex<InputChannel>,
}

impl InputPresenter {
    pub fn new(channel: InputChannel) -> Self {
        Self {
            channel: Mutex::new(channel),
        }
    }
}

#[async_trait]
impl ChoicePresenter for InputPresenter {
    async fn present(&self, request: &ChoiceRequest) -> AskResult<String> {
        let input = InputRequest::new(request.clone());
        let request_id = input.id;
        debug!(%request_id, questions = request.questions.len(), "presenting choice request");

        let response = self.channel.lock().await.request_input(input).await?;
        match response.kind {
            InputResponseKind::Payload { payload } => Ok(payload),
            InputResponseKind::Cancelled => {
                debug!(%request_id, "choice request cancelled by the UI");
                Err(AskError::Cancelled)
            }
        }
    }
}
