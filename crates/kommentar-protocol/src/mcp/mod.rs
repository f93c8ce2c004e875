//! MCP (Model Context Protocol) type definitions.

pub mod initialize;
pub mod notifications;
pub mod tools;

pub use initialize::*;
pub use notifications::*;
pub use tools::*;

/// MCP protocol method names.
pub mod methods {
    pub const INITIALIZE: &str = "initialize";
    pub const PING: &str = "ping";
    pub const TOOLS_LIST: &str = "tools/list";
    pub const TOOLS_CALL: &str = "tools/call";
    pub const NOTIFICATIONS_INITIALIZED: &str = "notifications/initialized";
    pub const NOTIFICATIONS_CANCELLED: &str = "notifications/cancelled";
}
