//! Literature source plugins behind a trait-based registry.
//!
//! This module defines the [`PaperSource`] trait that all upstream sources
//! implement. A source fetches one page of results at a time; the collector
//! drives the paging loop, applies the skip policy, and sleeps between
//! pages. New sources are added by implementing the trait and registering
//! them in [`SourceRegistry`].

pub mod mock;
mod pubmed;
mod pubmed_web;
mod registry;
mod semantic;

pub use mock::MockSource;
pub use pubmed::PubMedSource;
pub use pubmed_web::PubMedWebSource;
pub use registry::SourceRegistry;
pub use semantic::SemanticScholarSource;

use std::time::Duration;

use async_trait::async_trait;

use crate::models::{PaperRecord, SearchQuery};

/// One page of results from a source.
#[derive(Debug, Clone, Default)]
pub struct SourcePage {
    pub records: Vec<PaperRecord>,

    /// Whether the source believes more pages exist after this one
    pub has_more: bool,
}

impl SourcePage {
    pub fn new(records: Vec<PaperRecord>, has_more: bool) -> Self {
        Self { records, has_more }
    }

    /// An empty final page, the canonical "exhausted" answer
    pub fn exhausted() -> Self {
        Self::default()
    }
}

/// The interface every literature source implements.
///
/// `page` is 0-based; sources translate to whatever their upstream uses.
/// Implementations skip malformed individual results (logging them) rather
/// than failing the page, reserving `Err` for page-level failures such as
/// network errors or an upstream error status.
#[async_trait]
pub trait PaperSource: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source (used in configuration and CLI)
    fn id(&self) -> &str;

    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Fetch one page of results for the query
    async fn fetch_page(&self, query: &SearchQuery, page: usize)
        -> Result<SourcePage, SourceError>;
}

/// Errors that can occur when interacting with a source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Parsing error (XML, JSON, HTML, etc.)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimit,

    /// Requested item not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// API error from the source
    #[error("API error: {0}")]
    Api(String),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("Error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}

impl From<quick_xml::DeError> for SourceError {
    fn from(err: quick_xml::DeError) -> Self {
        SourceError::Parse(format!("XML: {}", err))
    }
}

/// Default User-Agent: crate name and version.
pub(crate) fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Build the HTTP client shared by all sources: explicit timeouts so a hung
/// upstream cannot stall the run indefinitely.
pub(crate) fn http_client(user_agent: &str) -> Result<reqwest::Client, SourceError> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|e| SourceError::Other(format!("Failed to create HTTP client: {}", e)))
}

/// Map a non-success HTTP status to the right error variant.
pub(crate) fn status_error(source: &str, status: reqwest::StatusCode) -> SourceError {
    if status.as_u16() == 429 {
        SourceError::RateLimit
    } else {
        SourceError::Api(format!("{} returned status: {}", source, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_page_exhausted() {
        let page = SourcePage::exhausted();
        assert!(page.records.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_error_display() {
        let err = SourceError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = SourceError::RateLimit;
        assert_eq!(err.to_string(), "Rate limit exceeded");
    }

    #[test]
    fn test_status_error_maps_too_many_requests() {
        let err = status_error("PubMed", reqwest::StatusCode::TOO_MANY_REQUESTS);
        assert!(matches!(err, SourceError::RateLimit));

        let err = status_error("PubMed", reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, SourceError::Api(_)));
    }

    #[test]
    fn test_default_user_agent_carries_version() {
        let ua = default_user_agent();
        assert!(ua.starts_with("pathoverb/"));
    }
}
