//! The `Tool` abstraction.
//!
//! A tool is a name, a typed input contract described by a JSON Schema,
//! and an async invoke function from validated input to a result
//! envelope. Nothing here knows about transports, so tools can be unit
//! tested by calling `invoke` directly.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use kommentar_protocol::mcp::tools::{McpToolDefinition, ToolsCallResult};
use kommentar_protocol::schema;

use crate::error::ToolError;

/// A callable tool with a typed input.
///
/// `invoke` must not fail: every per-call problem is reported as an
/// error-flagged `ToolsCallResult`.
#[async_trait]
pub trait Tool: Send + Sync + 'static {
    /// Typed arguments, deserialized after schema validation.
    type Input: DeserializeOwned + Send;

    /// Unique tool name advertised to the host.
    fn name(&self) -> &'static str;

    /// Short human-readable title.
    fn title(&self) -> &'static str;

    /// Description shown to the agent.
    fn description(&self) -> &'static str;

    /// JSON Schema of the `arguments` object.
    fn input_schema(&self) -> Value;

    /// Runs the tool.
    async fn invoke(&self, input: Self::Input) -> ToolsCallResult;
}

/// Object-safe view of a [`Tool`], used by the registry.
///
/// Implemented for every `Tool`; the blanket impl performs validation
/// and deserialization so tools only ever see well-formed input.
#[async_trait]
pub trait DynTool: Send + Sync {
    /// Tool name.
    fn name(&self) -> &'static str;

    /// Definition advertised by `tools/list`.
    fn definition(&self) -> McpToolDefinition;

    /// Validates raw JSON arguments and invokes the tool.
    async fn call(&self, arguments: Value) -> Result<ToolsCallResult, ToolError>;
}

#[async_trait]
impl<T: Tool> DynTool for T {
    fn name(&self) -> &'static str {
        Tool::name(self)
    }

    fn definition(&self) -> McpToolDefinition {
        McpToolDefinition {
            name: Tool::name(self).to_string(),
            title: Some(self.title().to_string()),
            description: Some(self.description().to_string()),
            input_schema: self.input_schema(),
        }
    }

    async fn call(&self, arguments: Value) -> Result<ToolsCallResult, ToolError> {
        let invalid = |message: String| ToolError::InvalidArguments {
            tool: Tool::name(self).to_string(),
            message,
        };

        schema::validate(&self.input_schema(), &arguments).map_err(|e| invalid(e.to_string()))?;

        let arguments = match arguments {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        let input: T::Input =
            serde_json::from_value(arguments).map_err(|e| invalid(e.to_string()))?;

        Ok(self.invoke(input).await)
    }
}
