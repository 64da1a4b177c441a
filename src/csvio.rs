//! CSV reading and writing for every pipeline artifact.
//!
//! Headers are written explicitly so an empty result set still yields a
//! well-formed file.

use std::path::Path;

use crate::models::{PaperRecord, VerbCount, VerbOccurrence};

/// CSV I/O errors
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Strip a search term down to filename-safe characters
///
/// Keeps alphanumerics, spaces, dashes and underscores, then turns spaces
/// into underscores. Case is preserved.
pub fn sanitize_term(term: &str) -> String {
    term.trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .replace(' ', "_")
}

/// Name of the collected-papers CSV for a search term
pub fn papers_csv_name(term: &str) -> String {
    format!("{}_research_papers.csv", sanitize_term(term))
}

/// Name of the verb-occurrence CSV for a search term
pub fn verbs_csv_name(term: &str) -> String {
    format!("{}_following_verbs.csv", sanitize_term(term))
}

/// Name of the verb-frequency CSV for a search term
pub fn frequency_csv_name(term: &str) -> String {
    format!("{}_verb_frequency.csv", sanitize_term(term))
}

/// Write collected papers with a Title,Abstract,Link header
pub fn write_papers(path: impl AsRef<Path>, records: &[PaperRecord]) -> Result<(), CsvError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;

    writer.write_record(["Title", "Abstract", "Link"])?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a collected-papers CSV back into records
pub fn read_papers(path: impl AsRef<Path>) -> Result<Vec<PaperRecord>, CsvError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

/// Write verb occurrences with the full six-column header
pub fn write_occurrences(
    path: impl AsRef<Path>,
    occurrences: &[VerbOccurrence],
) -> Result<(), CsvError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;

    writer.write_record(["Source", "Text", "Link", "Verb", "Original_Form", "Context"])?;
    for occurrence in occurrences {
        writer.serialize(occurrence)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write verb frequencies with a Verb,Count header
pub fn write_frequencies(path: impl AsRef<Path>, counts: &[VerbCount]) -> Result<(), CsvError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;

    writer.write_record(["Verb", "Count"])?;
    for count in counts {
        writer.serialize(count)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a verb-frequency CSV back into counts
pub fn read_frequencies(path: impl AsRef<Path>) -> Result<Vec<VerbCount>, CsvError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut counts = Vec::new();
    for result in reader.deserialize() {
        counts.push(result?);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceField;

    #[test]
    fn test_sanitize_term() {
        assert_eq!(sanitize_term("glioblastoma"), "glioblastoma");
        assert_eq!(sanitize_term("lung cancer"), "lung_cancer");
        assert_eq!(sanitize_term("influenza (H1N1)"), "influenza_H1N1");
        assert_eq!(sanitize_term("  multiple sclerosis  "), "multiple_sclerosis");
        assert_eq!(sanitize_term("non-small-cell"), "non-small-cell");
    }

    #[test]
    fn test_output_names() {
        assert_eq!(
            papers_csv_name("lung cancer"),
            "lung_cancer_research_papers.csv"
        );
        assert_eq!(
            verbs_csv_name("lung cancer"),
            "lung_cancer_following_verbs.csv"
        );
        assert_eq!(
            frequency_csv_name("lung cancer"),
            "lung_cancer_verb_frequency.csv"
        );
    }

    #[test]
    fn test_papers_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers.csv");

        let records = vec![
            PaperRecord::new(
                "Title with, comma",
                "Abstract with \"quotes\" and\na newline.",
                "https://example.org/1",
            ),
            PaperRecord::new("Plain title", "Plain abstract.", "https://example.org/2"),
        ];

        write_papers(&path, &records).unwrap();
        let read_back = read_papers(&path).unwrap();

        assert_eq!(read_back.len(), 2);
        assert_eq!(read_back[0].title, "Title with, comma");
        assert_eq!(
            read_back[0].abstract_text,
            "Abstract with \"quotes\" and\na newline."
        );
        assert_eq!(read_back[1].link, "https://example.org/2");
    }

    #[test]
    fn test_empty_papers_still_write_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers.csv");

        write_papers(&path, &[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().next(), Some("Title,Abstract,Link"));
        assert!(read_papers(&path).unwrap().is_empty());
    }

    #[test]
    fn test_occurrences_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verbs.csv");

        let occurrences = vec![VerbOccurrence {
            source: SourceField::Abstract,
            text: "Glioblastoma invasion mechanisms.".to_string(),
            link: "https://example.org/1".to_string(),
            verb: "invade".to_string(),
            original_form: "invades".to_string(),
            context: "that glioblastoma invades surrounding tissue".to_string(),
        }];

        write_occurrences(&path, &occurrences).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("Source,Text,Link,Verb,Original_Form,Context")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Abstract,"));
        assert!(row.contains("invade"));
        assert!(row.contains("invades"));
    }

    #[test]
    fn test_frequencies_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freq.csv");

        let counts = vec![VerbCount::new("invade", 4), VerbCount::new("resist", 2)];
        write_frequencies(&path, &counts).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().next(), Some("Verb,Count"));

        let read_back = read_frequencies(&path).unwrap();
        assert_eq!(read_back.len(), 2);
        assert_eq!(read_back[0].verb, "invade");
        assert_eq!(read_back[0].count, 4);
    }

    #[test]
    fn test_read_papers_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        assert!(read_papers(&path).is_err());
    }
}
