//! Input channel between a tool invocation and the user interface
//!
//! A choice request is the only point where a tool invocation waits on a
//! human. The invocation sends an [`InputRequest`] over an [`InputChannel`];
//! the UI side receives it on the [`InputChannelHandle`], shows the questions,
//! and answers with an [`InputResponse`] carrying a response payload.
//!
//! Tools do not talk to the channel directly. They depend on the
//! [`ChoicePresenter`] capability, which [`InputPresenter`] implements on top
//! of the channel and which tests or other front-ends can replace.
//!
//! # Example
//!
//! ```ignore
//! let (channel, mut handle) = InputChannel::new(16);
//!
//! tokio::spawn(async move {
//!     while let Some(request) = handle.next_request().await {
//!         let payload = show_form(&request.request);
//!         handle.respond(InputResponse::payload(request.id, payload)).await.ok();
//!     }
//! });
//!
//! let presenter = InputPresenter::new(channel);
//! let payload = presenter.present(&choice_request).await?;
//! ```

mod auto_response;
mod channel;
mod presenter;
mod request;
mod response;

pub use auto_response::{AutoResponder, AutoResponse};
pub use channel::{InputChannel, InputChannelHandle};
pub use presenter::{ChoicePresenter, InputPresenter};
pub use request::InputRequest;
pub use response::{InputResponse, InputResponseKind};
