//! askchoice tools
//!
//! - `interaction`: tools that block on a human operator (ask_multiple_choice)

pub mod interaction;

pub use interaction::AskMultipleChoiceTool;
