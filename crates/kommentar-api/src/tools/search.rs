//! `search_commentaries` tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use kommentar_mcp::Tool;
use kommentar_protocol::mcp::tools::ToolsCallResult;
use kommentar_types::{Language, SortOrder};

use crate::client::CommentaryClient;
use crate::query::SearchQuery;
use crate::render;

/// Full-text search over commentaries.
pub struct SearchCommentariesTool {
    client: Arc<CommentaryClient>,
}

impl SearchCommentariesTool {
    pub fn new(client: Arc<CommentaryClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SearchCommentariesTool {
    type Input = SearchQuery;

    fn name(&self) -> &'static str {
        "search_commentaries"
    }

    fn title(&self) -> &'static str {
        "Search Commentaries"
    }

    fn description(&self) -> &'static str {
        "Searches for legal commentaries based on a query and filters."
    }

    fn input_schema(&self) -> Value {
        let languages: Vec<_> = Language::ALL.iter().map(Language::as_str).collect();
        let sort_orders: Vec<_> = SortOrder::ALL.iter().map(SortOrder::as_str).collect();
        json!({
            "type": "object",
            "properties": {
                "search": {
                    "type": "string",
                    "minLength": 1,
                    "description": "The full-text search query."
                },
                "language": {
                    "type": "string",
                    "enum": languages,
                    "description": "Content language."
                },
                "legislative_act": {
                    "type": "string",
                    "description": "Filter by legislative act ID."
                },
                "sort": {
                    "type": "string",
                    "enum": sort_orders,
                    "description": "Sort order."
                },
                "page": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Page number for pagination."
                }
            },
            "required": ["search"]
        })
    }

    async fn invoke(&self, input: SearchQuery) -> ToolsCallResult {
        match self.client.search(&input).await {
            Ok(commentaries) => ToolsCallResult::text(render::render_search_results(&commentaries)),
            Err(e) => {
                tracing::warn!(error = %e, "search_commentaries failed");
                ToolsCallResult::error(format!("Error searching commentaries: {e}"))
            }
        }
    }
}
