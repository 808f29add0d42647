//! Tool abstractions
//!
//! - [`Tool`] - the trait every agent-callable tool implements
//! - [`ToolError`] - error types for tool operations
//! - [`ToolCall`], [`ToolResult`], [`ToolSchema`] - call/result/schema types

pub mod error;
pub mod tool_trait;
pub mod types;

pub use error::ToolError;
pub use tool_trait::Tool;
pub use types::{ToolCall, ToolResult, ToolSchema};
