//! Handles the `tools/list` MCP method.

use kommentar_protocol::mcp::tools::ToolsListResult;
use kommentar_protocol::RequestId;

use crate::handler::JsonRpcOutput;
use crate::registry::ToolRegistry;

/// Handles the `tools/list` request.
///
/// The tool set is small and fixed, so everything fits on one page.
pub(crate) fn handle_tools_list(id: RequestId, registry: &ToolRegistry) -> JsonRpcOutput {
    let result = ToolsListResult {
        tools: registry.definitions(),
        next_cursor: None,
    };
    JsonRpcOutput::from_result(id, &result)
}
