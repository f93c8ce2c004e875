//! Handles the `initialize` MCP method.

use serde_json::Value;

use kommentar_protocol::mcp::initialize::{
    negotiate_protocol_version, InitializeParams, InitializeResult, ServerCapabilities, ServerInfo,
    ToolCapability,
};
use kommentar_protocol::{error_codes, RequestId};

use crate::handler::JsonRpcOutput;

/// Handles the `initialize` request and returns the server capabilities.
pub(crate) fn handle_initialize(
    id: RequestId,
    params: &Option<Value>,
    server_info: &ServerInfo,
) -> JsonRpcOutput {
    let requested = match params {
        Some(p) => match serde_json::from_value::<InitializeParams>(p.clone()) {
            Ok(parsed) => Some(parsed.protocol_version),
            Err(e) => {
                return JsonRpcOutput::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid initialize params: {e}"),
                );
            }
        },
        None => None,
    };

    let protocol_version = negotiate_protocol_version(requested.as_deref());
    tracing::info!(
        requested = requested.as_deref().unwrap_or("<none>"),
        agreed = protocol_version,
        "initialize"
    );

    let result = InitializeResult {
        protocol_version: protocol_version.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolCapability::default()),
        },
        server_info: server_info.clone(),
    };
    JsonRpcOutput::from_result(id, &result)
}
