//! Registry for the available paper sources.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use super::{
    pubmed::PubMedSource, pubmed_web::PubMedWebSource, semantic::SemanticScholarSource,
    PaperSource, SourceError,
};

/// Registry of all available paper sources, keyed by ID
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    sources: HashMap<String, Arc<dyn PaperSource>>,
}

impl SourceRegistry {
    /// Create a registry with all built-in sources
    ///
    /// The Semantic Scholar key is optional; the scraping source takes the
    /// delay applied between its per-paper detail fetches.
    pub fn new(
        semantic_api_key: Option<String>,
        web_item_delay: Duration,
    ) -> Result<Self, SourceError> {
        let mut registry = Self {
            sources: HashMap::new(),
        };

        registry.register(Arc::new(PubMedSource::new()?));
        registry.register(Arc::new(SemanticScholarSource::new(semantic_api_key)?));
        registry.register(Arc::new(PubMedWebSource::new(web_item_delay)?));

        Ok(registry)
    }

    /// Register a source
    pub fn register(&mut self, source: Arc<dyn PaperSource>) {
        self.sources.insert(source.id().to_string(), source);
    }

    /// Get a source by ID
    pub fn get(&self, id: &str) -> Option<&Arc<dyn PaperSource>> {
        self.sources.get(id)
    }

    /// Get a source by ID, returning an error if not found
    pub fn get_required(&self, id: &str) -> Result<&Arc<dyn PaperSource>, SourceError> {
        self.get(id)
            .ok_or_else(|| SourceError::NotFound(format!("Source '{}' not found", id)))
    }

    /// Get all registered sources
    pub fn all(&self) -> impl Iterator<Item = &Arc<dyn PaperSource>> {
        self.sources.values()
    }

    /// Get all source IDs
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(|s| s.as_str())
    }

    /// Check if a source exists
    pub fn has(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    /// Get the number of registered sources
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
