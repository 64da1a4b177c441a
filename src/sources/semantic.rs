//! Semantic Scholar source backed by the S2 Graph API.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::models::{PaperRecord, SearchQuery};
use crate::sources::{
    default_user_agent, http_client, status_error, PaperSource, SourceError, SourcePage,
};

/// Semantic Scholar Graph API base URL
const S2_API_BASE: &str = "https://api.semanticscholar.org/graph/v1";

/// Semantic Scholar research source
///
/// Works without an API key at a reduced rate limit. Items that fail the
/// typed parse are retried as raw JSON before being dropped.
#[derive(Debug, Clone)]
pub struct SemanticScholarSource {
    client: Arc<reqwest::Client>,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct S2SearchResponse {
    total: Option<usize>,
    #[serde(default)]
    data: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct S2Paper {
    #[serde(rename = "paperId")]
    paper_id: Option<String>,
    title: Option<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    url: Option<String>,
}

impl SemanticScholarSource {
    /// Create a new Semantic Scholar source
    pub fn new(api_key: Option<String>) -> Result<Self, SourceError> {
        Ok(Self {
            client: Arc::new(http_client(&default_user_agent())?),
            api_key,
        })
    }

    /// Build Graph API search URL for one page of results
    fn build_search_url(query: &SearchQuery, page: usize) -> String {
        let offset = page * query.page_size;
        format!(
            "{}/paper/search?query={}&offset={}&limit={}&fields=title,abstract,url",
            S2_API_BASE,
            urlencoding::encode(&query.query),
            offset,
            query.page_size
        )
    }

    /// Convert one result item into a paper record
    ///
    /// Tries the typed shape first, then falls back to pulling the fields
    /// straight out of the JSON value. Returns None when neither yields a
    /// usable title.
    fn record_from_item(item: &Value) -> Option<PaperRecord> {
        if let Ok(paper) = serde_json::from_value::<S2Paper>(item.clone()) {
            if let Some(record) = Self::record_from_paper(&paper) {
                return Some(record);
            }
        }

        let title = item.get("title")?.as_str()?.trim();
        if title.is_empty() {
            return None;
        }

        let abstract_text = item
            .get("abstract")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        let link = item
            .get("url")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .or_else(|| {
                item.get("paperId")
                    .and_then(|v| v.as_str())
                    .map(|id| format!("https://www.semanticscholar.org/paper/{}", id))
            })
            .unwrap_or_default();

        Some(PaperRecord::new(title, abstract_text, link))
    }

    fn record_from_paper(paper: &S2Paper) -> Option<PaperRecord> {
        let title = paper.title.as_deref()?.trim();
        if title.is_empty() {
            return None;
        }

        let link = paper
            .url
            .clone()
            .or_else(|| {
                paper
                    .paper_id
                    .as_ref()
                    .map(|id| format!("https://www.semanticscholar.org/paper/{}", id))
            })
            .unwrap_or_default();

        Some(PaperRecord::new(
            title,
            paper.abstract_text.clone().unwrap_or_default(),
            link,
        ))
    }

    /// Parse a search response body into records and a has-more flag
    fn parse_search_response(
        body: &str,
        query: &SearchQuery,
        page: usize,
    ) -> Result<SourcePage, SourceError> {
        let response: S2SearchResponse = serde_json::from_str(body)?;

        let mut records = Vec::new();
        for item in &response.data {
            match Self::record_from_item(item) {
                Some(record) => records.push(record),
                None => {
                    tracing::warn!("skipping Semantic Scholar item without a usable title");
                }
            }
        }

        let seen = page * query.page_size + response.data.len();
        let has_more = match response.total {
            Some(total) => seen < total,
            None => response.data.len() == query.page_size,
        };

        Ok(SourcePage::new(records, has_more))
    }
}

#[async_trait]
impl PaperSource for SemanticScholarSource {
    fn id(&self) -> &str {
        "semantic"
    }

    fn name(&self) -> &str {
        "Semantic Scholar"
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: usize,
    ) -> Result<SourcePage, SourceError> {
        let url = Self::build_search_url(query, page);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await.map_err(|e| {
            SourceError::Network(format!("Failed to search Semantic Scholar: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(status_error("Semantic Scholar", response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))?;

        Self::parse_search_response(&body, query, page)
    }
}
