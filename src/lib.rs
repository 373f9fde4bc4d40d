//! uninews - University news scrap manager
//!
//! Collects news articles for a set of keywords, keeps the ones whose title
//! names a tracked institution and exports them as CSV.

pub mod cli;
pub mod config;
pub mod datetime;
pub mod error;
pub mod logging;
pub mod news;
pub mod settings;
pub mod web;

pub use config::Config;
pub use datetime::DateRange;
pub use error::{NewsError, Result};
pub use news::{
    FeedSource, GoogleNewsFetcher, MatchedNewsItem, NewsItem, NewsService, SearchOutcome,
};
pub use settings::{Settings, SettingsStore};
pub use web::{AppState, WebServer};
