//! PubMed source that scrapes the public website instead of the API.
//!
//! Result pages list `article.full-docsum` entries; the abstract lives on
//! each paper's own page. One detail request is made per listed paper, with
//! a courtesy delay in between.

use async_trait::async_trait;
use scraper::{Html, Selector};
use std::sync::Arc;
use std::time::Duration;

use crate::models::{PaperRecord, SearchQuery};
use crate::sources::{http_client, status_error, PaperSource, SourceError, SourcePage};

/// PubMed website base URL
const PUBMED_BASE: &str = "https://pubmed.ncbi.nlm.nih.gov/";

/// Browser user agent for the website (the API client string gets blocked)
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0.0.0 Safari/537.36";

/// Results per page on the public website
const RESULTS_PER_PAGE: usize = 10;

/// Scraping PubMed source
#[derive(Debug, Clone)]
pub struct PubMedWebSource {
    client: Arc<reqwest::Client>,
    item_delay: Duration,
}

impl PubMedWebSource {
    /// Create a new scraping source with the given delay between detail fetches
    pub fn new(item_delay: Duration) -> Result<Self, SourceError> {
        Ok(Self {
            client: Arc::new(http_client(BROWSER_USER_AGENT)?),
            item_delay,
        })
    }

    /// Build website search URL; the site counts pages from 1
    fn build_search_url(query: &SearchQuery, page: usize) -> String {
        format!(
            "{}?term={}&page={}",
            PUBMED_BASE,
            urlencoding::encode(&query.query),
            page + 1
        )
    }

    /// Resolve a docsum href against the site base
    fn absolute_link(href: &str) -> String {
        if href.starts_with("http") {
            return href.to_string();
        }
        match url::Url::parse(PUBMED_BASE).and_then(|base| base.join(href)) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => format!("{}{}", PUBMED_BASE.trim_end_matches('/'), href),
        }
    }

    /// Pull the PMID out of a docsum href
    fn pmid_from_href(href: &str) -> Option<String> {
        let re = regex::Regex::new(r"/(\d{4,9})/?").ok()?;
        re.captures(href)?.get(1).map(|m| m.as_str().to_string())
    }

    /// Canonical paper link for a docsum href
    ///
    /// Listing hrefs carry tracking parameters; the PMID form is stable.
    fn paper_link(href: &str) -> String {
        match Self::pmid_from_href(href) {
            Some(pmid) => format!("{}{}/", PUBMED_BASE, pmid),
            None => Self::absolute_link(href),
        }
    }

    /// Parse a results page into (title, link) pairs
    fn parse_results(html: &str) -> Vec<(String, String)> {
        Self::try_parse_results(html).unwrap_or_default()
    }

    fn try_parse_results(html: &str) -> Option<Vec<(String, String)>> {
        let document = Html::parse_document(html);
        let item_selector = Selector::parse("article.full-docsum").ok()?;
        let title_selector = Selector::parse("a.docsum-title").ok()?;

        let mut results = Vec::new();

        for item in document.select(&item_selector) {
            let title_elem = match item.select(&title_selector).next() {
                Some(elem) => elem,
                None => continue,
            };

            let title = Self::collapse(&title_elem.text().collect::<String>());
            if title.is_empty() {
                continue;
            }

            let href = match title_elem.value().attr("href") {
                Some(href) => href,
                None => continue,
            };

            results.push((title, Self::paper_link(href)));
        }

        // markup without the article wrapper still carries docsum-title links
        if results.is_empty() {
            for title_elem in document.select(&title_selector) {
                let title = Self::collapse(&title_elem.text().collect::<String>());
                let href = match title_elem.value().attr("href") {
                    Some(href) => href,
                    None => continue,
                };
                if !title.is_empty() {
                    results.push((title, Self::paper_link(href)));
                }
            }
        }

        Some(results)
    }

    /// Parse an abstract out of a paper detail page
    fn parse_abstract(html: &str) -> String {
        Self::try_parse_abstract(html).unwrap_or_default()
    }

    fn try_parse_abstract(html: &str) -> Option<String> {
        let document = Html::parse_document(html);

        let content_selector = Selector::parse("div.abstract-content").ok()?;
        if let Some(elem) = document.select(&content_selector).next() {
            let text = Self::collapse(&elem.text().collect::<String>());
            if !text.is_empty() {
                return Some(text);
            }
        }

        let fallback_selector = Selector::parse("div#abstract").ok()?;
        document
            .select(&fallback_selector)
            .next()
            .map(|elem| Self::collapse(&elem.text().collect::<String>()))
    }

    /// Collapse runs of whitespace into single spaces
    fn collapse(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to fetch {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(status_error("PubMed website", response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))
    }
}

#[async_trait]
impl PaperSource for PubMedWebSource {
    fn id(&self) -> &str {
        "pubmed-web"
    }

    fn name(&self) -> &str {
        "PubMed (website)"
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: usize,
    ) -> Result<SourcePage, SourceError> {
        let search_url = Self::build_search_url(query, page);
        let listing = self.fetch_text(&search_url).await?;
        let items = Self::parse_results(&listing);

        if items.is_empty() {
            return Ok(SourcePage::exhausted());
        }

        // a short listing is the site's last page
        let has_more = items.len() >= RESULTS_PER_PAGE;
        let mut records = Vec::new();

        for (title, link) in items {
            tokio::time::sleep(self.item_delay).await;

            // a failed detail page loses one paper, not the whole page
            let abstract_text = match self.fetch_text(&link).await {
                Ok(html) => Self::parse_abstract(&html),
                Err(e) => {
                    tracing::warn!(link = %link, error = %e, "skipping paper detail page");
                    continue;
                }
            };

            records.push(PaperRecord::new(title, abstract_text, link));
        }

        Ok(SourcePage::new(records, has_more))
    }
}
