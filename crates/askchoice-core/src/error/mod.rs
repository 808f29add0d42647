//! Error types for askchoice
//!
//! [`AskError`] is the crate-wide error. Structural problems with a choice
//! request keep their [`ChoiceError`](crate::choice::ChoiceError) inside it.
//! Every error type implements [`UnifiedError`] so hosts can branch on a
//! stable code instead of message text.

mod constructors;
mod conversions;
mod types;
mod unified_error;

pub use types::{AskError, AskResult, UnifiedError};
