//! Paper metadata records produced by the collector.

use serde::{Deserialize, Serialize};

/// One literature result: title, abstract, canonical link.
///
/// Serde renames match the CSV header row ({Title, Abstract, Link}) so the
/// struct round-trips through the collector output file unchanged. No
/// identifier exists beyond the link; duplicates across pages are possible
/// and not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Abstract")]
    pub abstract_text: String,

    #[serde(rename = "Link")]
    pub link: String,
}

impl PaperRecord {
    /// Create a new record
    pub fn new(
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            abstract_text: abstract_text.into(),
            link: link.into(),
        }
    }

    /// Whether the record carries a usable abstract
    pub fn has_abstract(&self) -> bool {
        !self.abstract_text.trim().is_empty()
    }

    /// Case-insensitive containment check against the abstract text
    pub fn abstract_mentions(&self, term: &str) -> bool {
        self.abstract_text
            .to_lowercase()
            .contains(&term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let rec = PaperRecord::new(
            "Glioblastoma invasion mechanisms",
            "Glioblastoma invades surrounding tissue.",
            "https://pubmed.ncbi.nlm.nih.gov/12345/",
        );

        assert_eq!(rec.title, "Glioblastoma invasion mechanisms");
        assert!(rec.has_abstract());
        assert_eq!(rec.link, "https://pubmed.ncbi.nlm.nih.gov/12345/");
    }

    #[test]
    fn test_has_abstract_rejects_whitespace() {
        let rec = PaperRecord::new("Title", "   \n ", "https://example.org/1");
        assert!(!rec.has_abstract());

        let rec = PaperRecord::new("Title", "", "https://example.org/2");
        assert!(!rec.has_abstract());
    }

    #[test]
    fn test_abstract_mentions_is_case_insensitive() {
        let rec = PaperRecord::new("T", "Glioblastoma multiforme remains incurable.", "L");

        assert!(rec.abstract_mentions("glioblastoma"));
        assert!(rec.abstract_mentions("GLIOBLASTOMA"));
        assert!(!rec.abstract_mentions("melanoma"));
    }

    #[test]
    fn test_serde_field_names_match_csv_header() {
        let rec = PaperRecord::new("T", "A", "L");
        let json = serde_json::to_string(&rec).unwrap();

        assert!(json.contains("\"Title\""));
        assert!(json.contains("\"Abstract\""));
        assert!(json.contains("\"Link\""));
    }
}
