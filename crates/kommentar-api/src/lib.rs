//! # kommentar-api
//!
//! Adapters between the Online Kommentar REST API and MCP tools.
//!
//! `client` issues the HTTP requests, `query` builds the search query
//! string, `render` turns records into agent-readable text and `tools`
//! binds the three together as `search_commentaries` and
//! `get_commentary_by_id`.

pub mod client;
pub mod error;
pub mod query;
pub mod render;
pub mod tools;

pub use client::{ClientSettings, CommentaryClient};
pub use error::ApiError;
pub use query::SearchQuery;
pub use tools::{register_all, GetCommentaryTool, LookupInput, SearchCommentariesTool};
