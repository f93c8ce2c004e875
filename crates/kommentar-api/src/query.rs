//! Search parameters and their query-string encoding.

use serde::{Deserialize, Serialize};

use kommentar_types::{Language, SortOrder};

/// Typed input of `search_commentaries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Full-text query.
    pub search: String,
    #[serde(default)]
    pub language: Option<Language>,
    /// Legislative act identifier.
    #[serde(default)]
    pub legislative_act: Option<String>,
    #[serde(default)]
    pub sort: Option<SortOrder>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u32>,
}

impl SearchQuery {
    /// Creates a query with only the search text set.
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    /// Key/value pairs to send upstream, in a fixed order.
    ///
    /// Absent values are left out entirely, and so are empty strings and
    /// a zero page: nothing is ever sent as an empty parameter.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if let Some(language) = self.language {
            pairs.push(("language", language.as_str().to_string()));
        }
        if let Some(act) = self.legislative_act.as_deref().filter(|a| !a.is_empty()) {
            pairs.push(("legislative_act", act.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_only() {
        let q = SearchQuery::new("Vertrag");
        assert_eq!(q.pairs(), vec![("search", "Vertrag".to_string())]);
    }

    #[test]
    fn all_filters_in_order() {
        let q = SearchQuery {
            search: "Art. 8".into(),
            language: Some(Language::De),
            legislative_act: Some("bv".into()),
            sort: Some(SortOrder::DateDesc),
            page: Some(3),
        };
        let keys: Vec<_> = q.pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["search", "language", "legislative_act", "sort", "page"]);
        assert_eq!(q.pairs()[3].1, "-date");
        assert_eq!(q.pairs()[4].1, "3");
    }

    #[test]
    fn empty_and_zero_values_are_dropped() {
        let q = SearchQuery {
            search: String::new(),
            legislative_act: Some(String::new()),
            page: Some(0),
            ..SearchQuery::default()
        };
        assert!(q.pairs().is_empty());
    }

    #[test]
    fn deserializes_from_tool_arguments() {
        let q: SearchQuery =
            serde_json::from_str(r#"{"search":"x","language":"fr","sort":"title","page":2}"#)
                .expect("de");
        assert_eq!(q.language, Some(Language::Fr));
        assert_eq!(q.sort, Some(SortOrder::TitleAsc));
        assert_eq!(q.page, Some(2));
        assert!(q.legislative_act.is_none());
    }
}
