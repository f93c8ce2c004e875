//! # kommentar-types
//!
//! Domain types for the Online Kommentar adapter.
//! Pure data definitions mirroring the commentary REST API payloads,
//! with no dependencies beyond serde.

/// Public endpoint of the Online Kommentar REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://onlinekommentar.ch/api";

pub mod commentary;
pub mod filter;

// Re-exports for convenience.
pub use commentary::{
    Commentary, CommentaryEnvelope, CommentaryPage, Contributor, LegalDomainRef,
    LegislativeActRef,
};
pub use filter::{Language, SortOrder};
