//! PubMed source backed by the NCBI E-utilities API.

use async_trait::async_trait;
use quick_xml::de::from_str;
use serde::Deserialize;
use std::sync::Arc;

use crate::models::{PaperRecord, SearchQuery};
use crate::sources::{
    default_user_agent, http_client, status_error, PaperSource, SourceError, SourcePage,
};

/// PubMed E-utilities API base URLs
const PUBMED_ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
const PUBMED_EFETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

/// PubMed research source
///
/// One page is an esearch call (PMIDs plus the total hit count) followed by
/// a batched efetch for titles and abstracts.
#[derive(Debug, Clone)]
pub struct PubMedSource {
    client: Arc<reqwest::Client>,
}

impl PubMedSource {
    /// Create a new PubMed source
    pub fn new() -> Result<Self, SourceError> {
        Ok(Self {
            client: Arc::new(http_client(&default_user_agent())?),
        })
    }

    /// Build E-utilities search URL for one page of PMIDs
    fn build_search_url(query: &SearchQuery, page: usize) -> String {
        let retstart = page * query.page_size;
        let params = [
            ("db", "pubmed".to_string()),
            ("term", query.query.clone()),
            ("retstart", retstart.to_string()),
            ("retmax", query.page_size.to_string()),
            ("retmode", "xml".to_string()),
        ];

        let joined = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", PUBMED_ESEARCH_URL, joined)
    }

    /// Build E-utilities fetch URL for specific PubMed IDs
    fn build_fetch_url(ids: &[String]) -> String {
        format!(
            "{}?db=pubmed&id={}&retmode=xml",
            PUBMED_EFETCH_URL,
            ids.join(",")
        )
    }

    /// Parse E-utilities search response XML into (total count, PMIDs)
    fn parse_search_response(xml: &str) -> Result<(Option<usize>, Vec<String>), SourceError> {
        #[derive(Debug, Deserialize)]
        #[allow(non_snake_case)]
        struct ESearchResult {
            Count: Option<String>,
            IdList: Option<IdList>,
        }

        #[derive(Debug, Deserialize)]
        struct IdList {
            #[serde(rename = "Id", default)]
            ids: Vec<String>,
        }

        let result: ESearchResult = from_str(xml)
            .map_err(|e| SourceError::Parse(format!("Failed to parse PubMed search XML: {}", e)))?;

        let count = result.Count.as_deref().and_then(|c| c.parse().ok());
        let ids = result.IdList.map(|l| l.ids).unwrap_or_default();

        Ok((count, ids))
    }

    /// Parse E-utilities fetch response XML into paper records
    fn parse_fetch_response(xml: &str) -> Result<Vec<PaperRecord>, SourceError> {
        #[derive(Debug, Deserialize)]
        struct PubmedArticleSet {
            #[serde(rename = "PubmedArticle", default)]
            articles: Vec<PubmedArticle>,
        }

        #[derive(Debug, Deserialize)]
        #[allow(non_snake_case)]
        struct PubmedArticle {
            MedlineCitation: Option<MedlineCitation>,
        }

        #[derive(Debug, Deserialize)]
        #[allow(non_snake_case)]
        struct MedlineCitation {
            PMID: Option<Pmid>,
            Article: Option<Article>,
        }

        #[derive(Debug, Deserialize)]
        struct Pmid {
            #[serde(rename = "$text")]
            id: String,
        }

        #[derive(Debug, Deserialize)]
        #[allow(non_snake_case)]
        struct Article {
            ArticleTitle: Option<ArticleTitle>,
            Abstract: Option<Abstract>,
        }

        #[derive(Debug, Deserialize)]
        struct ArticleTitle {
            #[serde(rename = "$text")]
            title: Option<String>,
        }

        #[derive(Debug, Deserialize)]
        struct Abstract {
            #[serde(rename = "AbstractText", default)]
            abstract_texts: Vec<AbstractText>,
        }

        #[derive(Debug, Deserialize)]
        struct AbstractText {
            #[serde(rename = "$text")]
            text: Option<String>,
        }

        let result: PubmedArticleSet = from_str(xml)
            .map_err(|e| SourceError::Parse(format!("Failed to parse PubMed fetch XML: {}", e)))?;

        let mut records = Vec::new();

        for article in result.articles {
            let citation = match article.MedlineCitation {
                Some(c) => c,
                None => continue,
            };

            let pmid = citation
                .PMID
                .as_ref()
                .map(|p| p.id.clone())
                .unwrap_or_default();

            let title = citation
                .Article
                .as_ref()
                .and_then(|a| a.ArticleTitle.as_ref())
                .and_then(|t| t.title.clone())
                .unwrap_or_default();

            if title.is_empty() {
                tracing::warn!(pmid = %pmid, "skipping PubMed article without a title");
                continue;
            }

            // structured abstracts arrive as multiple labeled segments
            let abstract_text = citation
                .Article
                .as_ref()
                .and_then(|a| a.Abstract.as_ref())
                .map(|ab| {
                    ab.abstract_texts
                        .iter()
                        .filter_map(|at| at.text.as_deref())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default();

            let link = format!("https://pubmed.ncbi.nlm.nih.gov/{}/", pmid);

            records.push(PaperRecord::new(title, abstract_text, link));
        }

        Ok(records)
    }
}

#[async_trait]
impl PaperSource for PubMedSource {
    fn id(&self) -> &str {
        "pubmed"
    }

    fn name(&self) -> &str {
        "PubMed"
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: usize,
    ) -> Result<SourcePage, SourceError> {
        let search_url = Self::build_search_url(query, page);

        let response = self
            .client
            .get(&search_url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to search PubMed: {}", e)))?;

        if !response.status().is_success() {
            return Err(status_error("PubMed", response.status()));
        }

        let xml = response
            .text()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))?;

        let (count, ids) = Self::parse_search_response(&xml)?;

        if ids.is_empty() {
            return Ok(SourcePage::exhausted());
        }

        let fetch_url = Self::build_fetch_url(&ids);

        let response = self
            .client
            .get(&fetch_url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to fetch PubMed details: {}", e)))?;

        if !response.status().is_success() {
            return Err(status_error("PubMed", response.status()));
        }

        let fetch_xml = response
            .text()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))?;

        let records = Self::parse_fetch_response(&fetch_xml)?;

        let seen = page * query.page_size + ids.len();
        let has_more = match count {
            Some(total) => seen < total,
            None => ids.len() == query.page_size,
        };

        Ok(SourcePage::new(records, has_more))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_url() {
        let query = SearchQuery::new("glioblastoma treatment research").with_page_size(20);
        let url = PubMedSource::build_search_url(&query, 0);

        assert!(url.starts_with(PUBMED_ESEARCH_URL));
        assert!(url.contains("db=pubmed"));
        assert!(url.contains("term=glioblastoma%20treatment%20research"));
        assert!(url.contains("retstart=0"));
        assert!(url.contains("retmax=20"));
        assert!(url.contains("retmode=xml"));
    }

    #[test]
    fn test_build_search_url_advances_retstart() {
        let query = SearchQuery::new("melanoma").with_page_size(25);
        let url = PubMedSource::build_search_url(&query, 3);
        assert!(url.contains("retstart=75"));
    }

    #[test]
    fn test_build_fetch_url_joins_ids() {
        let ids = vec!["111".to_string(), "222".to_string()];
        let url = PubMedSource::build_fetch_url(&ids);

        assert!(url.starts_with(PUBMED_EFETCH_URL));
        assert!(url.contains("id=111,222"));
        assert!(url.contains("retmode=xml"));
    }

    #[test]
    fn test_parse_search_response() {
        let xml = r#"<?xml version="1.0"?>
<eSearchResult>
  <Count>5463</Count>
  <RetMax>2</RetMax>
  <RetStart>0</RetStart>
  <IdList>
    <Id>38012345</Id>
    <Id>37098765</Id>
  </IdList>
</eSearchResult>"#;

        let (count, ids) = PubMedSource::parse_search_response(xml).unwrap();
        assert_eq!(count, Some(5463));
        assert_eq!(ids, vec!["38012345", "37098765"]);
    }

    #[test]
    fn test_parse_search_response_empty() {
        let xml = r#"<eSearchResult><Count>0</Count><IdList></IdList></eSearchResult>"#;
        let (count, ids) = PubMedSource::parse_search_response(xml).unwrap();
        assert_eq!(count, Some(0));
        assert!(ids.is_empty());
    }

    #[test]
    fn test_parse_fetch_response() {
        let xml = r#"<?xml version="1.0"?>
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>38012345</PMID>
      <Article>
        <ArticleTitle>Glioblastoma invasion mechanisms.</ArticleTitle>
        <Abstract>
          <AbstractText>Background text.</AbstractText>
          <AbstractText>Glioblastoma invades surrounding tissue.</AbstractText>
        </Abstract>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>37098765</PMID>
      <Article>
        <ArticleTitle>A title without an abstract.</ArticleTitle>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

        let records = PubMedSource::parse_fetch_response(xml).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].title, "Glioblastoma invasion mechanisms.");
        assert_eq!(
            records[0].abstract_text,
            "Background text. Glioblastoma invades surrounding tissue."
        );
        assert_eq!(
            records[0].link,
            "https://pubmed.ncbi.nlm.nih.gov/38012345/"
        );

        assert!(!records[1].has_abstract());
    }

    #[test]
    fn test_parse_fetch_response_skips_untitled() {
        let xml = r#"<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>1</PMID>
      <Article></Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

        let records = PubMedSource::parse_fetch_response(xml).unwrap();
        assert!(records.is_empty());
    }
}
