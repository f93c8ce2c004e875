//! Commentary records as returned by the upstream API.
//!
//! Records are read-only projections: the adapter never builds or
//! mutates one, it only deserializes and renders them.

use serde::{Deserialize, Serialize};

/// Reference to the legislative act a commentary covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegislativeActRef {
    pub id: String,
    pub title: String,
}

/// Reference to the legal domain a commentary belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDomainRef {
    pub id: String,
    pub name: String,
}

/// An author or editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub id: String,
    pub name: String,
}

/// A single legal commentary.
///
/// Search results carry a subset of the fields; everything except `id`
/// therefore falls back to its default when absent. `date` is passed
/// through exactly as the API formats it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentary {
    /// Opaque identifier.
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Content language code (`en`, `de`, `fr` or `it`).
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub legislative_act: Option<LegislativeActRef>,
    #[serde(default)]
    pub legal_domain: Option<LegalDomainRef>,
    #[serde(default)]
    pub authors: Vec<Contributor>,
    #[serde(default)]
    pub editors: Option<Vec<Contributor>>,
    /// Canonical web link.
    #[serde(default)]
    pub html_link: String,
    /// Long-form content, only present on detail lookups.
    #[serde(default)]
    pub content: Option<String>,
}

/// `GET /commentaries` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentaryPage {
    pub data: Vec<Commentary>,
}

/// `GET /commentaries/{id}` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentaryEnvelope {
    pub data: Commentary,
}
