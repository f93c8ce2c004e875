//! Registry-level errors.
//!
//! These are raised before any tool runs and surface to the host as
//! JSON-RPC `invalid params` errors.

use thiserror::Error;

/// Errors from tool lookup and argument validation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool is registered under the requested name.
    #[error("unknown tool: {name}")]
    UnknownTool { name: String },
    /// A tool with the same name is already registered.
    #[error("tool already registered: {name}")]
    Duplicate { name: String },
    /// Arguments failed schema validation or typed deserialization.
    #[error("invalid arguments for tool '{tool}': {message}")]
    InvalidArguments { tool: String, message: String },
}
