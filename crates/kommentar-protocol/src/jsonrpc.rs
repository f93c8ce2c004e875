//! JSON-RPC 2.0 types for MCP transport.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The only protocol version this crate speaks.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request ID.
    pub id: RequestId,
    /// Method name.
    pub method: String,
    /// Optional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request ID (matches the request).
    pub id: RequestId,
    /// Result value.
    pub result: Value,
}

/// JSON-RPC 2.0 error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request ID, `null` when the request could not be parsed.
    pub id: Option<RequestId>,
    /// Error details.
    pub error: JsonRpcError,
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
    /// Optional structured data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Request ID can be a number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    /// Numeric ID.
    Number(i64),
    /// String ID.
    String(String),
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// JSON-RPC 2.0 notification (no id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Method name.
    pub method: String,
    /// Optional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// A message received from the host, classified by the presence of `id`.
#[derive(Debug, Clone)]
pub enum IncomingMessage {
    /// Expects exactly one response.
    Request(JsonRpcRequest),
    /// Must never receive a response.
    Notification(JsonRpcNotification),
}

/// Why a frame could not be turned into an [`IncomingMessage`].
#[derive(Debug, Error)]
pub enum FrameError {
    /// The text is not JSON at all.
    #[error("parse error: {0}")]
    Syntax(#[source] serde_json::Error),
    /// Valid JSON, but not a request or notification. `id` is kept when
    /// it could still be read so the sender gets its answer.
    #[error("invalid request: {source}")]
    Invalid {
        id: Option<RequestId>,
        #[source]
        source: serde_json::Error,
    },
}

impl FrameError {
    /// JSON-RPC error code for this failure.
    pub fn code(&self) -> i32 {
        match self {
            Self::Syntax(_) => error_codes::PARSE_ERROR,
            Self::Invalid { .. } => error_codes::INVALID_REQUEST,
        }
    }

    /// Builds the error reply, addressed to the frame's id when known.
    pub fn to_response(&self) -> JsonRpcErrorResponse {
        match self {
            Self::Invalid { id: Some(id), .. } => {
                JsonRpcErrorResponse::error(id.clone(), self.code(), self.to_string())
            }
            _ => JsonRpcErrorResponse::without_id(self.code(), self.to_string()),
        }
    }
}

impl IncomingMessage {
    /// Parses one frame of JSON text.
    ///
    /// A frame carrying an `id` is a request, anything else with a
    /// `method` is a notification.
    ///
    /// # Errors
    ///
    /// `FrameError::Syntax` for malformed JSON, `FrameError::Invalid`
    /// when the JSON does not have the shape of either message.
    pub fn parse(text: &str) -> Result<Self, FrameError> {
        let value: Value = serde_json::from_str(text).map_err(FrameError::Syntax)?;
        match value.get("id") {
            Some(raw_id) => {
                let id = RequestId::deserialize(raw_id).ok();
                serde_json::from_value(value)
                    .map(Self::Request)
                    .map_err(|source| FrameError::Invalid { id, source })
            }
            None => serde_json::from_value(value)
                .map(Self::Notification)
                .map_err(|source| FrameError::Invalid { id: None, source }),
        }
    }
}

/// Standard JSON-RPC error codes.
pub mod error_codes {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

impl JsonRpcRequest {
    /// Creates a new JSON-RPC 2.0 request.
    pub fn new(id: RequestId, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

impl JsonRpcNotification {
    /// Creates a new JSON-RPC 2.0 notification.
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
        }
    }
}

impl JsonRpcResponse {
    /// Creates a success response.
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
        }
    }
}

impl JsonRpcErrorResponse {
    /// Creates an error response for a known request.
    pub fn error(id: RequestId, code: i32, message: impl Into<String>) -> Self {
        Self::build(Some(id), code, message.into())
    }

    /// Creates an error response for a frame whose id could not be read.
    pub fn without_id(code: i32, message: impl Into<String>) -> Self {
        Self::build(None, code, message.into())
    }

    fn build(id: Option<RequestId>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: JsonRpcError {
                code,
                message,
                data: None,
            },
        }
    }
}
