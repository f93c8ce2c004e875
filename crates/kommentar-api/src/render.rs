//! Plain-text rendering of commentary records.
//!
//! Pure functions over borrowed records. Missing optional fields are
//! rendered as an explicit placeholder, never dropped, so a reader can
//! tell "absent" from "empty".

use kommentar_types::{Commentary, Contributor};

/// Search result text when the API returns no rows.
pub const NO_RESULTS: &str = "No commentaries found for the given criteria.";
/// Placeholder for a missing legal domain or legislative act.
pub const NOT_SPECIFIED: &str = "Not specified";
/// Placeholder for a missing or empty editor list.
pub const NONE_LISTED: &str = "None listed";
/// Placeholder for a record without long-form content.
pub const NO_CONTENT: &str = "Full content not available in summary.";

/// Returns `value`, or `placeholder` when it is absent or empty.
pub fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(placeholder)
}

/// Comma-joined contributor names.
pub fn join_names(contributors: &[Contributor]) -> String {
    contributors
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Four-line block used for one search hit.
pub fn render_summary(c: &Commentary) -> String {
    format!(
        "ID: {}\nTitle: {}\nDate: {}\nURL: {}",
        c.id, c.title, c.date, c.html_link
    )
}

/// All search hits in API order, separated by a blank line.
pub fn render_search_results(commentaries: &[Commentary]) -> String {
    if commentaries.is_empty() {
        return NO_RESULTS.to_string();
    }
    commentaries
        .iter()
        .map(render_summary)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Full detail block for a single commentary.
pub fn render_detail(c: &Commentary) -> String {
    let act = or_placeholder(
        c.legislative_act.as_ref().map(|a| a.title.as_str()),
        NOT_SPECIFIED,
    );
    let domain = or_placeholder(
        c.legal_domain.as_ref().map(|d| d.name.as_str()),
        NOT_SPECIFIED,
    );
    let editors = c
        .editors
        .as_deref()
        .map(join_names)
        .filter(|names| !names.is_empty())
        .unwrap_or_else(|| NONE_LISTED.to_string());
    let content = or_placeholder(c.content.as_deref(), NO_CONTENT);

    let text = format!(
        "Title: {title}\n\
         ID: {id}\n\
         Language: {language}\n\
         Publication Date: {date}\n\
         Legislative Act: {act}\n\
         Legal Domain: {domain}\n\
         Authors: {authors}\n\
         Editors: {editors}\n\
         URL: {url}\n\
         Content:\n\
         {content}",
        title = c.title,
        id = c.id,
        language = c.language,
        date = c.date,
        authors = join_names(&c.authors),
        url = c.html_link,
    );
    text.trim().to_string()
}
