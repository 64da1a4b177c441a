//! Integration tests for the full collect/extract/graph pipeline.
//!
//! These run the stages end to end against scripted sources and real files
//! in a temporary directory; no network access is involved.

use std::sync::Arc;
use std::time::Duration;

use pathoverb::collector::{CollectOptions, Collector};
use pathoverb::csvio;
use pathoverb::extractor::{self, ExtractOptions};
use pathoverb::graph::{graph_image_name, VerbGraph};
use pathoverb::models::{PaperRecord, SourceField};
use pathoverb::nlp::EnglishTagger;
use pathoverb::sources::{MockSource, SourceError};

fn collect_options(target: usize) -> CollectOptions {
    CollectOptions {
        target,
        query_extra: String::new(),
        page_delay: Duration::ZERO,
        ..CollectOptions::default()
    }
}

fn sample_papers() -> Vec<PaperRecord> {
    vec![
        PaperRecord::new(
            "Glioblastoma invasion mechanisms.",
            "Recent work shows that glioblastoma rapidly invades surrounding brain tissue \
             and resists standard therapy.",
            "https://pubmed.ncbi.nlm.nih.gov/1/",
        ),
        PaperRecord::new(
            "Recurrence after resection.",
            "After surgery, glioblastoma recurs in most patients and spreads along white \
             matter tracts.",
            "https://pubmed.ncbi.nlm.nih.gov/2/",
        ),
        PaperRecord::new(
            "Immunotherapy overview.",
            "Checkpoint inhibitors have shown little benefit, because glioblastoma evades \
             immune surveillance.",
            "https://pubmed.ncbi.nlm.nih.gov/3/",
        ),
    ]
}

#[tokio::test]
async fn test_collect_extract_graph_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let term = "glioblastoma";

    // collect from a scripted source and write the papers CSV
    let source = Arc::new(MockSource::new("scripted").push_page(sample_papers(), false));
    let collector = Collector::new(source, collect_options(10));
    let outcome = collector.run(term).await.unwrap();
    assert_eq!(outcome.records.len(), 3);

    let papers_path = dir.path().join(csvio::papers_csv_name(term));
    csvio::write_papers(&papers_path, &outcome.records).unwrap();

    // extract from the file, the way the CLI does it
    let records = csvio::read_papers(&papers_path).unwrap();
    assert_eq!(records.len(), 3);

    let tagger = EnglishTagger::new();
    let options = ExtractOptions {
        window: 6,
        ..ExtractOptions::default()
    };
    let occurrences =
        extractor::extract_from_papers(&records, term, &tagger, &options).unwrap();

    let verbs: Vec<&str> = occurrences.iter().map(|o| o.verb.as_str()).collect();
    assert!(verbs.contains(&"invade"));
    assert!(verbs.contains(&"recur"));
    assert!(verbs.contains(&"evade"));
    assert!(occurrences.iter().all(|o| o.source == SourceField::Abstract));

    let verbs_path = dir.path().join(csvio::verbs_csv_name(term));
    csvio::write_occurrences(&verbs_path, &occurrences).unwrap();

    let counts = extractor::frequency_table(&occurrences);
    let freq_path = dir.path().join(csvio::frequency_csv_name(term));
    csvio::write_frequencies(&freq_path, &counts).unwrap();

    // graph from the frequency file
    let read_counts = csvio::read_frequencies(&freq_path).unwrap();
    assert_eq!(read_counts.len(), counts.len());

    let graph = VerbGraph::build(term, &read_counts, 10).unwrap();
    let image_path = dir.path().join(graph_image_name(&freq_path));
    graph.render_svg(&image_path).unwrap();

    assert_eq!(
        image_path.file_name().unwrap().to_str().unwrap(),
        "glioblastoma_verb_frequency_graph.svg"
    );
    let svg = std::fs::read_to_string(&image_path).unwrap();
    assert!(svg.contains("glioblastoma"));
    assert!(svg.contains("invade"));
}

#[tokio::test]
async fn test_pipeline_survives_failed_pages() {
    let dir = tempfile::tempdir().unwrap();
    let term = "glioblastoma";

    let source = Arc::new(
        MockSource::new("flaky")
            .push_page(sample_papers()[..1].to_vec(), true)
            .push_error(SourceError::Network("connection reset".to_string()))
            .push_page(sample_papers()[1..].to_vec(), false),
    );

    let collector = Collector::new(source, collect_options(10));
    let outcome = collector.run(term).await.unwrap();

    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.stats.pages_failed, 1);

    let papers_path = dir.path().join(csvio::papers_csv_name(term));
    csvio::write_papers(&papers_path, &outcome.records).unwrap();
    assert_eq!(csvio::read_papers(&papers_path).unwrap().len(), 3);
}

#[test]
fn test_occurrence_rows_survive_the_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let term = "lung cancer";

    let records = vec![PaperRecord::new(
        "Metastasis patterns.",
        "In late stages, lung cancer metastasizes to the brain, liver, and bone.",
        "https://pubmed.ncbi.nlm.nih.gov/4/",
    )];

    let papers_path = dir.path().join(csvio::papers_csv_name(term));
    assert_eq!(
        papers_path.file_name().unwrap().to_str().unwrap(),
        "lung_cancer_research_papers.csv"
    );
    csvio::write_papers(&papers_path, &records).unwrap();

    let tagger = EnglishTagger::new();
    let occurrences = extractor::extract_from_papers(
        &csvio::read_papers(&papers_path).unwrap(),
        term,
        &tagger,
        &ExtractOptions::default(),
    )
    .unwrap();

    assert_eq!(occurrences.len(), 1);
    assert_eq!(occurrences[0].verb, "metastasize");
    assert_eq!(occurrences[0].original_form, "metastasizes");
    assert_eq!(occurrences[0].text, "Metastasis patterns.");

    let verbs_path = dir.path().join(csvio::verbs_csv_name(term));
    csvio::write_occurrences(&verbs_path, &occurrences).unwrap();

    let contents = std::fs::read_to_string(&verbs_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("Source,Text,Link,Verb,Original_Form,Context")
    );
    let row = lines.next().unwrap();
    assert!(row.contains("metastasize"));
    assert!(row.contains("https://pubmed.ncbi.nlm.nih.gov/4/"));
}

#[test]
fn test_empty_extraction_still_writes_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let term = "melanoma";

    let records = vec![PaperRecord::new(
        "An unrelated paper.",
        "Nothing in here matches.",
        "https://example.org/5",
    )];

    let tagger = EnglishTagger::new();
    let occurrences =
        extractor::extract_from_papers(&records, term, &tagger, &ExtractOptions::default())
            .unwrap();
    assert!(occurrences.is_empty());

    let freq_path = dir.path().join(csvio::frequency_csv_name(term));
    csvio::write_frequencies(&freq_path, &extractor::frequency_table(&occurrences)).unwrap();

    let read_back = csvio::read_frequencies(&freq_path).unwrap();
    assert!(read_back.is_empty());

    // no verbs means no graph
    assert!(VerbGraph::build(term, &read_back, 10).is_err());
}
