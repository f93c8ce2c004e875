//! The two MCP tools backed by [`CommentaryClient`].

mod lookup;
mod search;

use std::sync::Arc;

use kommentar_mcp::{ToolError, ToolRegistry};

use crate::client::CommentaryClient;

pub use lookup::{GetCommentaryTool, LookupInput};
pub use search::SearchCommentariesTool;

/// Registers `search_commentaries` and `get_commentary_by_id`, sharing
/// one client.
///
/// # Errors
///
/// Returns `ToolError::Duplicate` if either name is already taken.
pub fn register_all(
    registry: &mut ToolRegistry,
    client: Arc<CommentaryClient>,
) -> Result<(), ToolError> {
    registry.register(SearchCommentariesTool::new(client.clone()))?;
    registry.register(GetCommentaryTool::new(client))?;
    Ok(())
}
