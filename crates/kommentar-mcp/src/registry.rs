//! Tool registry.
//!
//! Holds the tools exposed to the host in registration order, which is
//! also the order `tools/list` reports them in.

use std::sync::Arc;

use serde_json::Value;

use kommentar_protocol::mcp::tools::{McpToolDefinition, ToolsCallResult};

use crate::error::ToolError;
use crate::tool::DynTool;

/// In-memory, immutable-after-startup set of tools.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn DynTool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Duplicate` if the name is already taken.
    pub fn register<T: DynTool + 'static>(&mut self, tool: T) -> Result<(), ToolError> {
        if self.get(tool.name()).is_some() {
            return Err(ToolError::Duplicate {
                name: tool.name().to_string(),
            });
        }
        tracing::debug!(tool = tool.name(), "registered tool");
        self.tools.push(Arc::new(tool));
        Ok(())
    }

    /// Looks a tool up by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn DynTool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Definitions of every registered tool.
    pub fn definitions(&self) -> Vec<McpToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns `true` if no tool is registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Validates `arguments` and invokes the named tool.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::UnknownTool` or `ToolError::InvalidArguments`;
    /// failures inside the tool come back as an error-flagged result.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<ToolsCallResult, ToolError> {
        let tool = self.get(name).ok_or_else(|| ToolError::UnknownTool {
            name: name.to_string(),
        })?;
        tool.call(arguments).await
    }
}
