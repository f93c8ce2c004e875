//! MCP request handler.
//!
//! Thin routing layer: each method family lives in `dispatch`, the
//! handler only owns shared state and picks the right function.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use kommentar_protocol::mcp::initialize::ServerInfo;
use kommentar_protocol::mcp::methods;
use kommentar_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse,
    RequestId,
};

use crate::dispatch;
use crate::registry::ToolRegistry;

/// A JSON-RPC reply, either success or error.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    /// Successful result.
    Success(JsonRpcResponse),
    /// Error reply.
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes `result` into a success reply, or an internal error
    /// if serialization fails.
    pub fn from_result<T: Serialize>(id: RequestId, result: &T) -> Self {
        match serde_json::to_value(result) {
            Ok(v) => Self::Success(JsonRpcResponse::success(id, v)),
            Err(e) => Self::error(id, error_codes::INTERNAL_ERROR, e.to_string()),
        }
    }

    /// Builds an error reply.
    pub fn error(id: RequestId, code: i32, message: impl Into<String>) -> Self {
        Self::Error(JsonRpcErrorResponse::error(id, code, message))
    }

    /// Serializes the reply to a single line of JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Success(r) => serde_json::to_string(r),
            Self::Error(e) => serde_json::to_string(e),
        }
    }
}

/// Routes MCP requests to the registry.
///
/// Holds no per-call state; one handler serves any number of
/// concurrent requests.
pub struct McpHandler {
    registry: Arc<ToolRegistry>,
    server_info: ServerInfo,
}

impl std::fmt::Debug for McpHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpHandler")
            .field("server_info", &self.server_info)
            .finish_non_exhaustive()
    }
}

impl McpHandler {
    /// Creates a handler advertising `server_info`.
    pub fn new(registry: Arc<ToolRegistry>, server_info: ServerInfo) -> Self {
        Self {
            registry,
            server_info,
        }
    }

    /// Returns the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Dispatches one request and returns its reply.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        match request.method.as_str() {
            methods::INITIALIZE => {
                dispatch::initialize::handle_initialize(id, &request.params, &self.server_info)
            }
            methods::PING => JsonRpcOutput::Success(JsonRpcResponse::success(id, json!({}))),
            methods::TOOLS_LIST => dispatch::tools_list::handle_tools_list(id, &self.registry),
            methods::TOOLS_CALL => {
                dispatch::tools_call::handle_tools_call(id, &request.params, &self.registry).await
            }
            other => JsonRpcOutput::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("unknown method: {other}"),
            ),
        }
    }

    /// Handles a notification. Never produces a reply.
    ///
    /// Cancellation of in-flight calls is the server loop's job; here it
    /// is only logged.
    pub fn handle_notification(&self, notification: &JsonRpcNotification) {
        match notification.method.as_str() {
            methods::NOTIFICATIONS_INITIALIZED => info!("client initialized"),
            methods::NOTIFICATIONS_CANCELLED => {
                debug!(params = ?notification.params, "client cancelled a request")
            }
            other => debug!(method = other, "ignoring notification"),
        }
    }
}
