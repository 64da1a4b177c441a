//! Scripted in-memory source for tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::models::{PaperRecord, SearchQuery};
use crate::sources::{PaperSource, SourceError, SourcePage};

/// Source that replays a fixed script of pages and errors
///
/// Each `fetch_page` call consumes the next script entry; once the script
/// runs out the source reports itself exhausted.
#[derive(Debug)]
pub struct MockSource {
    id: String,
    name: String,
    script: Mutex<VecDeque<Result<SourcePage, SourceError>>>,
    calls: AtomicUsize,
    last_query: Mutex<Option<String>>,
}

impl MockSource {
    /// Create an empty mock with the given ID
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("Mock ({})", id),
            id,
            script: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Append a successful page to the script
    pub fn push_page(self, records: Vec<PaperRecord>, has_more: bool) -> Self {
        self.lock_script()
            .push_back(Ok(SourcePage::new(records, has_more)));
        self
    }

    /// Append a failing page to the script
    pub fn push_error(self, error: SourceError) -> Self {
        self.lock_script().push_back(Err(error));
        self
    }

    /// Number of `fetch_page` calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Query text seen by the most recent `fetch_page` call
    pub fn last_query(&self) -> Option<String> {
        self.last_query
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<SourcePage, SourceError>>> {
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl PaperSource for MockSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        _page: usize,
    ) -> Result<SourcePage, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_query
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(query.query.clone());
        match self.lock_script().pop_front() {
            Some(entry) => entry,
            None => Ok(SourcePage::exhausted()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(n: usize) -> PaperRecord {
        PaperRecord::new(
            format!("Paper {}", n),
            format!("Abstract {}", n),
            format!("https://example.org/{}", n),
        )
    }

    #[tokio::test]
    async fn test_mock_replays_script_in_order() {
        let source = MockSource::new("mock")
            .push_page(vec![paper(1)], true)
            .push_error(SourceError::Network("down".to_string()))
            .push_page(vec![paper(2)], false);

        let query = SearchQuery::new("term");

        let page = source.fetch_page(&query, 0).await.unwrap();
        assert_eq!(page.records[0].title, "Paper 1");
        assert!(page.has_more);

        assert!(source.fetch_page(&query, 1).await.is_err());

        let page = source.fetch_page(&query, 2).await.unwrap();
        assert_eq!(page.records[0].title, "Paper 2");
        assert!(!page.has_more);

        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn test_mock_exhausts_after_script() {
        let source = MockSource::new("mock");
        let query = SearchQuery::new("term");

        let page = source.fetch_page(&query, 0).await.unwrap();
        assert!(page.records.is_empty());
        assert!(!page.has_more);
    }
}
