//! `get_commentary_by_id` tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use kommentar_mcp::Tool;
use kommentar_protocol::mcp::tools::ToolsCallResult;

use crate::client::CommentaryClient;
use crate::error::ApiError;
use crate::render;

/// Typed input of `get_commentary_by_id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupInput {
    pub id: String,
}

/// Fetches one commentary with authors, editors and content.
pub struct GetCommentaryTool {
    client: Arc<CommentaryClient>,
}

impl GetCommentaryTool {
    pub fn new(client: Arc<CommentaryClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetCommentaryTool {
    type Input = LookupInput;

    fn name(&self) -> &'static str {
        "get_commentary_by_id"
    }

    fn title(&self) -> &'static str {
        "Get Commentary by ID"
    }

    fn description(&self) -> &'static str {
        "Retrieves a specific commentary by its ID."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "minLength": 1,
                    "description": "The ID of the commentary to retrieve."
                }
            },
            "required": ["id"]
        })
    }

    async fn invoke(&self, input: LookupInput) -> ToolsCallResult {
        match self.client.fetch(&input.id).await {
            Ok(commentary) => ToolsCallResult::text(render::render_detail(&commentary)),
            Err(e @ ApiError::NotFound { .. }) => ToolsCallResult::error(e.to_string()),
            Err(e) => {
                tracing::warn!(id = %input.id, error = %e, "get_commentary_by_id failed");
                ToolsCallResult::error(format!("Error retrieving commentary: {e}"))
            }
        }
    }
}
