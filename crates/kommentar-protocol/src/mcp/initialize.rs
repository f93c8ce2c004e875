//! MCP initialize method types.
//!
//! The initialize handshake is the first message exchanged between
//! client and server to negotiate capabilities and protocol version.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Client capabilities declared during initialization.
///
/// Kept opaque: the server does not act on any client capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientCapabilities(pub serde_json::Map<String, Value>);

/// Tool-related capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCapability {
    /// Whether the server emits `notifications/tools/list_changed`.
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}

/// Server capabilities returned during initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tools capability (present if server exposes tools).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolCapability>,
}

/// Client info sent during initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Client name.
    pub name: String,
    /// Client version.
    pub version: String,
}

/// Server identity returned during initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

/// Request params for `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeParams {
    /// Protocol version requested by client.
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Client capabilities.
    #[serde(default)]
    pub capabilities: ClientCapabilities,
    /// Client info.
    #[serde(rename = "clientInfo")]
    pub client_info: ClientInfo,
}

/// Response for `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResult {
    /// Protocol version agreed by server.
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server capabilities.
    pub capabilities: ServerCapabilities,
    /// Server info.
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

/// Newest MCP protocol version supported by this implementation.
pub const LATEST_PROTOCOL_VERSION: &str = "2025-06-18";

/// Every protocol version the server can speak, newest first.
pub const SUPPORTED_PROTOCOL_VERSIONS: [&str; 3] = ["2025-06-18", "2025-03-26", "2024-11-05"];

/// Picks the version to answer an `initialize` with.
///
/// A supported client version is echoed back; anything else (or no
/// request at all) gets the latest version.
pub fn negotiate_protocol_version(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|r| SUPPORTED_PROTOCOL_VERSIONS.into_iter().find(|v| *v == r))
        .unwrap_or(LATEST_PROTOCOL_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_params_accepts_arbitrary_capabilities() {
        let json = r#"{
            "protocolVersion": "2025-03-26",
            "capabilities": {"roots": {"listChanged": true}, "sampling": {}},
            "clientInfo": {"name": "claude", "version": "1.0.0"}
        }"#;
        let params: InitializeParams = serde_json::from_str(json).expect("deserialize");
        assert_eq!(params.protocol_version, "2025-03-26");
        assert!(params.capabilities.0.contains_key("roots"));
    }

    #[test]
    fn initialize_result_uses_camel_case_keys() {
        let result = InitializeResult {
            protocol_version: LATEST_PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolCapability::default()),
            },
            server_info: ServerInfo {
                name: "online-kommentar-server".to_string(),
                version: "1.0.0".to_string(),
            },
        };
        let v = serde_json::to_value(&result).expect("serialize");
        assert_eq!(v["protocolVersion"], LATEST_PROTOCOL_VERSION);
        assert_eq!(v["serverInfo"]["name"], "online-kommentar-server");
        assert_eq!(v["capabilities"]["tools"]["listChanged"], false);
    }

    #[test]
    fn negotiation_echoes_supported_version() {
        assert_eq!(negotiate_protocol_version(Some("2024-11-05")), "2024-11-05");
    }

    #[test]
    fn negotiation_falls_back_to_latest() {
        assert_eq!(
            negotiate_protocol_version(Some("1999-01-01")),
            LATEST_PROTOCOL_VERSION
        );
        assert_eq!(negotiate_protocol_version(None), LATEST_PROTOCOL_VERSION);
    }
}
