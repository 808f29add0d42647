//! ask_multiple_choice tool
//!
//! Asks the operator one or more multiple-choice questions and returns the
//! chosen option labels in an `<answers>` block.

mod args;
mod schema;
mod tool;

#[cfg(test)]
mod tests;

pub use args::resolve_arguments;
pub use tool::{AskMultipleChoiceTool, TOOL_NAME};
