//! Data model types shared across the pipeline stages.

mod occurrence;
mod paper;
mod search;

pub use occurrence::{SourceField, VerbCount, VerbOccurrence};
pub use paper::PaperRecord;
pub use search::{SearchQuery, DEFAULT_PAGE_SIZE};
