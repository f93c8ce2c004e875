//! Closed value sets accepted by the search endpoint.

use serde::{Deserialize, Serialize};

/// Content language of a commentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
    Fr,
    It,
}

impl Language {
    /// All accepted languages, in schema order.
    pub const ALL: [Language; 4] = [Language::En, Language::De, Language::Fr, Language::It];

    /// Returns the two-letter code sent upstream.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
            Self::It => "it",
        }
    }
}

/// Result ordering, ascending or descending (`-` prefix) by title or date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "title")]
    TitleAsc,
    #[serde(rename = "-title")]
    TitleDesc,
    #[serde(rename = "date")]
    DateAsc,
    #[serde(rename = "-date")]
    DateDesc,
}

impl SortOrder {
    /// All accepted sort keys, in schema order.
    pub const ALL: [SortOrder; 4] = [
        SortOrder::TitleAsc,
        SortOrder::TitleDesc,
        SortOrder::DateAsc,
        SortOrder::DateDesc,
    ];

    /// Returns the sort key sent upstream.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TitleAsc => "title",
            Self::TitleDesc => "-title",
            Self::DateAsc => "date",
            Self::DateDesc => "-date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_serde_uses_lowercase_codes() {
        let s = serde_json::to_string(&Language::Fr).expect("ser");
        assert_eq!(s, "\"fr\"");
        let back: Language = serde_json::from_str("\"it\"").expect("de");
        assert_eq!(back, Language::It);
    }

    #[test]
    fn unknown_language_rejected() {
        assert!(serde_json::from_str::<Language>("\"es\"").is_err());
        assert!(serde_json::from_str::<Language>("\"EN\"").is_err());
    }

    #[test]
    fn sort_order_keeps_minus_prefix() {
        let s = serde_json::to_string(&SortOrder::DateDesc).expect("ser");
        assert_eq!(s, "\"-date\"");
        let back: SortOrder = serde_json::from_str("\"-title\"").expect("de");
        assert_eq!(back, SortOrder::TitleDesc);
    }

    #[test]
    fn as_str_matches_wire_form() {
        for order in SortOrder::ALL {
            let wire = serde_json::to_value(order).expect("ser");
            assert_eq!(wire, order.as_str());
        }
        for lang in Language::ALL {
            let wire = serde_json::to_value(lang).expect("ser");
            assert_eq!(wire, lang.as_str());
        }
    }
}
