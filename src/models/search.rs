//! Search query passed to paper sources.

/// Default number of records requested per page from API sources.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// A literature search request.
///
/// `page_size` is a hint for API sources that accept a limit parameter; the
/// HTML-scrape source ignores it because the website serves a fixed number
/// of results per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Full query string sent upstream (term plus any qualifier suffix)
    pub query: String,

    /// Requested records per page, where the source supports it
    pub page_size: usize,
}

impl SearchQuery {
    /// Create a query with the default page size
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the per-page record count
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}
