//! # Pathoverb
//!
//! Collects disease-literature paper metadata from scholarly sources and
//! extracts the verbs that follow mentions of a disease term, as CSV files
//! plus an optional frequency graph.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (PaperRecord, VerbOccurrence, etc.)
//! - [`sources`]: Paper source plugins with a trait-based architecture
//! - [`collector`]: Paging loop that gathers papers from one source
//! - [`nlp`]: Sentence segmentation and part-of-speech tagging
//! - [`extractor`]: Term-mention windows and verb extraction
//! - [`graph`]: Verb-frequency graph rendering
//! - [`csvio`]: CSV artifacts shared by every stage
//! - [`config`]: Configuration management

pub mod collector;
pub mod config;
pub mod csvio;
pub mod extractor;
pub mod graph;
pub mod models;
pub mod nlp;
pub mod sources;

// Re-export commonly used types
pub use collector::{CollectOptions, Collector};
pub use extractor::{ExtractOptions, MatchMode};
pub use models::{PaperRecord, VerbCount, VerbOccurrence};
pub use nlp::{EnglishTagger, Tagger};
pub use sources::{PaperSource, SourceRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
