//! Paper collection pipeline.
//!
//! Pulls pages from one source until the target count is reached or the
//! source runs dry. Failed pages are skipped, never retried; a run of
//! consecutive failures is treated the same as exhaustion.

use std::sync::Arc;
use std::time::Duration;

use crate::models::{PaperRecord, SearchQuery, DEFAULT_PAGE_SIZE};
use crate::sources::PaperSource;

/// Consecutive page failures tolerated before the source is written off
const MAX_CONSECUTIVE_FAILURES: usize = 3;

/// Collection errors
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("Search term must not be empty")]
    EmptyTerm,

    #[error("Target paper count must be at least 1")]
    ZeroTarget,
}

/// Tuning knobs for a collection run
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Number of papers to stop at
    pub target: usize,
    /// Extra words appended to the search term
    pub query_extra: String,
    /// Results requested per page (API sources only)
    pub page_size: usize,
    /// Pause between page fetches
    pub page_delay: Duration,
    /// Drop records whose abstract never mentions the search term
    pub require_term_in_abstract: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            target: 50,
            query_extra: "treatment research".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_delay: Duration::from_millis(2000),
            require_term_in_abstract: false,
        }
    }
}

/// Counters reported alongside the collected records
#[derive(Debug, Clone, Default)]
pub struct CollectStats {
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub records_seen: usize,
    pub records_kept: usize,
}

/// Result of a collection run
#[derive(Debug)]
pub struct CollectOutcome {
    pub records: Vec<PaperRecord>,
    pub stats: CollectStats,
}

/// Drives one source through the paging loop
#[derive(Debug)]
pub struct Collector {
    source: Arc<dyn PaperSource>,
    options: CollectOptions,
}

impl Collector {
    /// Create a collector over one source
    pub fn new(source: Arc<dyn PaperSource>, options: CollectOptions) -> Self {
        Self { source, options }
    }

    /// Full query text sent to the source
    fn build_query_text(&self, term: &str) -> String {
        let extra = self.options.query_extra.trim();
        if extra.is_empty() {
            term.to_string()
        } else {
            format!("{} {}", term, extra)
        }
    }

    /// Collect up to the target number of papers for a disease term
    ///
    /// Returns whatever was gathered even when individual pages failed;
    /// only invalid input aborts the run.
    pub async fn run(&self, term: &str) -> Result<CollectOutcome, CollectError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(CollectError::EmptyTerm);
        }
        if self.options.target == 0 {
            return Err(CollectError::ZeroTarget);
        }

        let query =
            SearchQuery::new(self.build_query_text(term)).with_page_size(self.options.page_size);

        tracing::info!(
            source = self.source.id(),
            query = %query.query,
            target = self.options.target,
            "starting collection"
        );

        let mut records: Vec<PaperRecord> = Vec::new();
        let mut stats = CollectStats::default();
        let mut page = 0usize;
        let mut consecutive_failures = 0usize;

        while records.len() < self.options.target {
            if page > 0 {
                tokio::time::sleep(self.options.page_delay).await;
            }

            match self.source.fetch_page(&query, page).await {
                Ok(result) => {
                    consecutive_failures = 0;
                    stats.pages_fetched += 1;
                    stats.records_seen += result.records.len();

                    for record in result.records {
                        if records.len() >= self.options.target {
                            break;
                        }
                        if !record.has_abstract() {
                            tracing::debug!(title = %record.title, "skipping record without abstract");
                            continue;
                        }
                        if self.options.require_term_in_abstract
                            && !record.abstract_mentions(term)
                        {
                            tracing::debug!(
                                title = %record.title,
                                "skipping record that never mentions the term"
                            );
                            continue;
                        }
                        records.push(record);
                    }

                    if !result.has_more {
                        tracing::info!(source = self.source.id(), "source exhausted");
                        break;
                    }
                }
                Err(e) => {
                    stats.pages_failed += 1;
                    consecutive_failures += 1;
                    tracing::warn!(
                        source = self.source.id(),
                        page,
                        error = %e,
                        "page fetch failed, skipping"
                    );
                    if consecutive_failures >= MAX_CONSECUTIVE_FAILURES {
                        tracing::warn!(
                            source = self.source.id(),
                            failures = consecutive_failures,
                            "giving up on source"
                        );
                        break;
                    }
                }
            }

            page += 1;
        }

        stats.records_kept = records.len();

        tracing::info!(
            kept = stats.records_kept,
            seen = stats.records_seen,
            pages = stats.pages_fetched,
            failed_pages = stats.pages_failed,
            "collection finished"
        );

        Ok(CollectOutcome { records, stats })
    }
}
