//! User interaction tools
//!
//! Tools that pause an invocation until a human operator answers.

pub mod ask_multiple_choice;

pub use ask_multiple_choice::AskMultipleChoiceTool;
