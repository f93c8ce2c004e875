//! MCP notification payloads.

use serde::{Deserialize, Serialize};

use crate::jsonrpc::RequestId;

/// Params of `notifications/cancelled`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelledParams {
    /// The in-flight request to abandon.
    #[serde(rename = "requestId")]
    pub request_id: RequestId,
    /// Optional reason given by the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
