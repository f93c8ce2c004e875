//! # kommentar-mcp
//!
//! Tool registry and MCP method dispatch (APPLICATION layer).
//!
//! Provides the transport-agnostic `Tool` abstraction, the
//! `ToolRegistry` that advertises and routes tools, and `McpHandler`
//! which maps JSON-RPC requests onto MCP methods.

mod dispatch;
pub mod error;
pub mod handler;
pub mod registry;
pub mod tool;

pub use error::ToolError;
pub use handler::{JsonRpcOutput, McpHandler};
pub use registry::ToolRegistry;
pub use tool::{DynTool, Tool};
