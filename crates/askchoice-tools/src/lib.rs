//! Tool implementations for askchoice

pub mod tools;

pub use tools::interaction::AskMultipleChoiceTool;

use askchoice_core::input::ChoicePresenter;
use askchoice_core::tools::Tool;
use std::sync::Arc;

/// Get all default tools, wired to the given presenter
pub fn get_default_tools(presenter: Arc<dyn ChoicePresenter>) -> Vec<Arc<dyn Tool>> {
    vec![Arc::new(AskMultipleChoiceTool::new(presenter))]
}
