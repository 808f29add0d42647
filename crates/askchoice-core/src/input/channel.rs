//! Input channel for async communication between a tool invocation and the UI

use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;
use uuid::Uuid;

use crate::config::InputSettings;
use crate::error::{AskError, AskResult};

use super::auto_response::{AutoResponder, AutoResponse};
use super::request::InputRequest;
use super::response::InputResponse;

/// Invocation side of the channel: sends choice requests, awaits answers
pub struct InputChannel {
    request_tx: mpsc::Sender<InputRequest>,
    response_rx: mpsc::Receiver<InputResponse>,
    /// Applied when a request carries no timeout of its own
    default_timeout: Option<Duration>,
    /// Set in non-interactive mode; answers without touching the UI
    auto_responder: Option<AutoResponder>,
}

/// UI side of the channel
pub struct InputChannelHandle {
    pub request_rx: mpsc::Receiver<InputRequest>,
    pub response_tx: mpsc::Sender<InputResponse>,
}

impl std::fmt::Debug for InputChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputChannel")
            .field("default_timeout", &self.default_timeout)
            .field("non_interactive", &self.is_non_interactive())
            .finish()
    }
}

impl InputChannel {
    /// Create a connected pair; `buffer_size` bounds queued requests
    pub fn new(buffer_size: usize) -> (Self, InputChannelHandle) {
        let capacity = buffer_size.max(1);
        let (request_tx, request_rx) = mpsc::channel(capacity);
        let (response_tx, response_rx) = mpsc::channel(capacity);

        (
            Self {
                request_tx,
                response_rx,
                default_timeout: None,
                auto_responder: None,
            },
            InputChannelHandle {
                request_rx,
                response_tx,
            },
        )
    }

    /// Create a channel pair from configuration
    ///
    /// When an auto-response mode is configured the channel answers by itself
    /// and no handle is returned.
    pub fn from_settings(settings: &InputSettings) -> (Self, Option<InputChannelHandle>) {
        if let Some(mode) = settings.auto_response {
            return (Self::non_interactive(mode.into()), None);
        }
        let (mut channel, handle) = Self::new(settings.buffer_size);
        channel.default_timeout = settings.timeout();
        (channel, Some(handle))
    }

    /// A channel that answers every request itself (batch/CI use)
    pub fn non_interactive(auto_response: AutoResponse) -> Self {
        // never used: the responder short-circuits `request_input`
        let (request_tx, _) = mpsc::channel(1);
        let (_, response_rx) = mpsc::channel(1);

        Self {
            request_tx,
            response_rx,
            default_timeout: None,
            auto_responder: Some(auto_response.into_responder()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = Some(timeout);
        self
    }

    /// Answer requests with `responder` instead of asking the UI
    pub fn with_auto_responder<F>(mut self, responder: F) -> Self
    where
        F: Fn(&InputRequest) -> InputResponse + Send + Sync + 'static,
    {
        self.auto_responder = Some(Box::new(responder));
        self
    }

    pub fn is_non_interactive(&self) -> bool {
        self.auto_responder.is_some()
    }

    /// Hand `request` to the UI and wait for its answer
    ///
    /// The request's own timeout wins over the channel default; with neither
    /// the wait is unbounded. Responses for other request ids are late
    /// answers to abandoned requests and are discarded.
    pub async fn request_input(&mut self, request: InputRequest) -> AskResult<InputResponse> {
        if let Some(ref responder) = self.auto_responder {
            return Ok(responder(&request));
        }

        let request_id = request.id;
        let timeout = request.timeout.or(self.default_timeout);

        self.request_tx
            .send(request)
            .await
            .map_err(|_| AskError::channel("No UI is listening for choice requests"))?;

        match timeout {
            Some(duration) => tokio::time::timeout(duration, self.await_response(request_id))
                .await
                .map_err(|_| AskError::timeout(duration))?,
            None => self.await_response(request_id).await,
        }
    }

    async fn await_response(&mut self, request_id: Uuid) -> AskResult<InputResponse> {
        loop {
            match self.response_rx.recv().await {
                Some(response) if response.request_id == request_id => return Ok(response),
                Some(stale) => {
                    debug!(
                        request_id = %stale.request_id,
                        expected = %request_id,
                        "discarding response to an abandoned request"
                    );
                }
                None => return Err(AskError::channel("UI closed the channel before answering")),
            }
        }
    }

    /// A response that is already waiting, if any
    pub fn try_recv(&mut self) -> Option<InputResponse> {
        self.response_rx.try_recv().ok()
    }
}

impl InputChannelHandle {
    /// Deliver an answer to the waiting invocation
    pub async fn respond(&self, response: InputResponse) -> AskResult<()> {
        self.response_tx
            .send(response)
            .await
            .map_err(|_| AskError::channel("The invocation stopped waiting for an answer"))
    }

    /// Receive the next request, or `None` once the invocation side is gone
    pub async fn next_request(&mut self) -> Option<InputRequest> {
        self.request_rx.recv().await
    }

    pub fn try_recv_request(&mut self) -> Option<InputRequest> {
        self.request_rx.try_recv().ok()
    }
}
