//! News search module for uninews.
//!
//! Fetches articles per keyword, filters them by institution name and
//! exports the result as CSV.

pub mod export;
pub mod fetcher;
pub mod pipeline;
pub mod service;
pub mod types;

pub use export::{export_file_name, to_csv, write_export, UTF8_BOM};
pub use fetcher::{filter_by_range, parse_items, FeedSource, GoogleNewsFetcher};
pub use pipeline::{dedup_by_link, match_and_sort, match_institution, process};
pub use service::NewsService;
pub use types::{MatchedNewsItem, NewsItem, SearchOutcome};
