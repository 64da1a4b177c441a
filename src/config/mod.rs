//! Configuration management.
//!
//! Settings come from an optional TOML file overlaid with `PATHOVERB__`
//! environment variables; anything unset falls back to built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::collector::CollectOptions;
use crate::extractor::{ExtractOptions, MatchMode};
use crate::models::DEFAULT_PAGE_SIZE;

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "pathoverb.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Paper collection settings
    #[serde(default)]
    pub collector: CollectorConfig,

    /// Verb extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Graph rendering settings
    #[serde(default)]
    pub graph: GraphConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            collector: CollectorConfig::default(),
            extractor: ExtractorConfig::default(),
            graph: GraphConfig::default(),
        }
    }
}

/// Paper collection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Source ID to collect from
    #[serde(default = "default_source")]
    pub source: String,

    /// Number of papers to collect
    #[serde(default = "default_target")]
    pub target: usize,

    /// Extra words appended to the search term
    #[serde(default = "default_query_extra")]
    pub query_extra: String,

    /// Results requested per page (API sources)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Pause between per-paper detail fetches (scraping source), in ms
    #[serde(default = "default_item_delay_ms")]
    pub item_delay_ms: u64,

    /// Pause between page fetches, in ms
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// Drop records whose abstract never mentions the search term
    #[serde(default)]
    pub require_term_in_abstract: bool,

    /// Semantic Scholar API key (optional, for higher rate limits)
    #[serde(default = "default_semantic_api_key")]
    pub semantic_api_key: Option<String>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
            query_extra: default_query_extra(),
            page_size: default_page_size(),
            item_delay_ms: default_item_delay_ms(),
            page_delay_ms: default_page_delay_ms(),
            require_term_in_abstract: false,
            semantic_api_key: default_semantic_api_key(),
        }
    }
}

impl CollectorConfig {
    /// Pause between per-paper detail fetches
    pub fn item_delay(&self) -> Duration {
        Duration::from_millis(self.item_delay_ms)
    }

    /// Pause between page fetches
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    /// Collection options derived from these settings
    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            target: self.target,
            query_extra: self.query_extra.clone(),
            page_size: self.page_size,
            page_delay: self.page_delay(),
            require_term_in_abstract: self.require_term_in_abstract,
        }
    }
}

fn default_source() -> String {
    "pubmed".to_string()
}

fn default_target() -> usize {
    50
}

fn default_query_extra() -> String {
    "treatment research".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_item_delay_ms() -> u64 {
    1000
}

fn default_page_delay_ms() -> u64 {
    2000
}

fn default_semantic_api_key() -> Option<String> {
    std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok()
}

/// Verb extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Tokens scanned after a mention when looking for a verb
    #[serde(default = "default_window")]
    pub window: usize,

    /// How tokens are matched against the term
    #[serde(default)]
    pub match_mode: MatchMode,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            match_mode: MatchMode::default(),
        }
    }
}

impl ExtractorConfig {
    /// Extraction options derived from these settings
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            window: self.window,
            match_mode: self.match_mode,
        }
    }
}

fn default_window() -> usize {
    5
}

/// Graph rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Number of most frequent verbs drawn
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            top: default_top(),
        }
    }
}

fn default_top() -> usize {
    10
}

/// Find a config file, preferring the working directory
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join("pathoverb").join("config.toml");
    if user.exists() {
        return Some(user);
    }
    None
}

/// Load configuration from a file and the environment
///
/// With no explicit path the usual locations are searched; running without
/// any config file at all is fine and yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, config::ConfigError> {
    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config_file(),
    };

    let mut builder = config::Config::builder();
    if let Some(p) = &path {
        builder = builder.add_source(config::File::from(p.as_path()));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix("PATHOVERB")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}
