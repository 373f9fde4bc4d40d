//! News search feed fetcher.
//!
//! Each call issues exactly one request. Failures never reach the caller:
//! a keyword whose request fails simply contributes no articles.

use std::time::Duration;

use async_trait::async_trait;
use feed_rs::parser;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::FeedConfig;
use crate::datetime::{feed_timestamp, DateRange};
use crate::news::types::NewsItem;
use crate::{NewsError, Result};

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: usize = 5;

/// A source of news items for a keyword.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Return the articles for `keyword` published inside `range`.
    ///
    /// Best effort: any failure yields an empty list.
    async fn fetch(&self, keyword: &str, range: &DateRange) -> Vec<NewsItem>;
}

/// Fetcher for the Google News RSS search endpoint.
pub struct GoogleNewsFetcher {
    client: Client,
    config: FeedConfig,
}

impl GoogleNewsFetcher {
    /// Create a new fetcher from the feed configuration.
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| NewsError::Feed(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the search URL for a keyword.
    pub fn search_url(&self, keyword: &str) -> String {
        format!(
            "{}?q={}&hl={}&gl={}&ceid={}",
            self.config.endpoint,
            urlencoding::encode(keyword),
            self.config.language,
            self.config.region,
            self.config.ceid,
        )
    }

    /// Fetch and parse all items for a keyword, without date filtering.
    pub async fn fetch_all(&self, keyword: &str) -> Result<Vec<NewsItem>> {
        let url = self.search_url(keyword);
        debug!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| NewsError::Feed(format!("failed to fetch feed: {}", e)))?;

        if !response.status().is_success() {
            return Err(NewsError::Feed(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let max_size = self.config.max_feed_size_bytes;
        if let Some(content_length) = response.content_length() {
            if content_length > max_size {
                return Err(NewsError::Feed(format!(
                    "feed too large: {} bytes (max {} bytes)",
                    content_length, max_size
                )));
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| NewsError::Feed(format!("failed to read response: {}", e)))?;

        if bytes.len() as u64 > max_size {
            return Err(NewsError::Feed(format!(
                "feed too large: {} bytes (max {} bytes)",
                bytes.len(),
                max_size
            )));
        }

        parse_items(&bytes)
    }
}

#[async_trait]
impl FeedSource for GoogleNewsFetcher {
    async fn fetch(&self, keyword: &str, range: &DateRange) -> Vec<NewsItem> {
        match self.fetch_all(keyword).await {
            Ok(items) => {
                let total = items.len();
                let in_range = filter_by_range(items, range);
                debug!(
                    "'{}': {} of {} items inside {} ~ {}",
                    keyword,
                    in_range.len(),
                    total,
                    range.start,
                    range.end
                );
                in_range
            }
            Err(e) => {
                warn!("fetch for '{}' failed: {}", keyword, e);
                Vec::new()
            }
        }
    }
}

/// Keep only the items published inside the range.
pub fn filter_by_range(items: Vec<NewsItem>, range: &DateRange) -> Vec<NewsItem> {
    items
        .into_iter()
        .filter(|item| range.contains(item.published_on))
        .collect()
}

/// Parse feed bytes into news items.
///
/// Entries without a title, a link or a parseable publication date are
/// skipped.
pub fn parse_items(bytes: &[u8]) -> Result<Vec<NewsItem>> {
    let feed = parser::Builder::new()
        .timestamp_parser(feed_timestamp)
        .build()
        .parse(bytes)
        .map_err(|e| NewsError::Feed(format!("failed to parse feed: {}", e)))?;

    let items = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let Some(title) = entry.title.map(|t| t.content) else {
                debug!("skipping entry {} without title", entry.id);
                return None;
            };
            let Some(link) = entry.links.first().map(|l| l.href.clone()) else {
                debug!("skipping '{}' without link", title);
                return None;
            };
            let Some(published) = entry.published else {
                debug!("skipping '{}' with unparseable date", title);
                return None;
            };
            Some(NewsItem::new(published.date_naive(), title, link))
        })
        .collect();

    Ok(items)
}
