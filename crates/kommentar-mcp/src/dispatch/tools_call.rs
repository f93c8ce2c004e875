//! Handles the `tools/call` MCP method.

use serde_json::Value;

use kommentar_protocol::mcp::tools::ToolsCallParams;
use kommentar_protocol::{error_codes, RequestId};

use crate::error::ToolError;
use crate::handler::JsonRpcOutput;
use crate::registry::ToolRegistry;

/// Handles the `tools/call` request.
///
/// Lookup and validation failures become JSON-RPC errors. Once the tool
/// runs, its envelope is relayed unchanged, error flag included.
pub(crate) async fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    registry: &ToolRegistry,
) -> JsonRpcOutput {
    // 1. Parse params
    let call_params = match params {
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => {
                return JsonRpcOutput::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid tools/call params: {e}"),
                );
            }
        },
        None => {
            return JsonRpcOutput::error(
                id,
                error_codes::INVALID_PARAMS,
                "tools/call requires params",
            );
        }
    };

    // 2. Validate and invoke
    tracing::debug!(tool = %call_params.name, %id, "calling tool");
    match registry.call(&call_params.name, call_params.arguments).await {
        Ok(result) => {
            if result.is_error {
                tracing::debug!(tool = %call_params.name, %id, "tool reported an error");
            }
            JsonRpcOutput::from_result(id, &result)
        }
        Err(e @ (ToolError::UnknownTool { .. } | ToolError::InvalidArguments { .. })) => {
            JsonRpcOutput::error(id, error_codes::INVALID_PARAMS, e.to_string())
        }
        Err(e) => JsonRpcOutput::error(id, error_codes::INTERNAL_ERROR, e.to_string()),
    }
}
