//! News types for uninews.

use chrono::NaiveDate;
use serde::Serialize;

/// An article returned by the search feed.
///
/// Two items with the same `link` are the same article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// Publication day.
    #[serde(rename = "date")]
    pub published_on: NaiveDate,
    /// Headline.
    pub title: String,
    /// Link to the article.
    pub link: String,
}

impl NewsItem {
    /// Create a new item.
    pub fn new(published_on: NaiveDate, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            published_on,
            title: title.into(),
            link: link.into(),
        }
    }

    /// Tag the item with the institution that matched its title.
    pub fn matched(self, institution: impl Into<String>) -> MatchedNewsItem {
        MatchedNewsItem {
            item: self,
            institution: institution.into(),
        }
    }
}

/// An article whose title mentions one of the configured institutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedNewsItem {
    /// The article.
    #[serde(flatten)]
    pub item: NewsItem,
    /// The first configured institution found in the title.
    #[serde(rename = "school")]
    pub institution: String,
}

impl MatchedNewsItem {
    /// Publication day.
    pub fn published_on(&self) -> NaiveDate {
        self.item.published_on
    }

    /// Headline.
    pub fn title(&self) -> &str {
        &self.item.title
    }

    /// Link to the article.
    pub fn link(&self) -> &str {
        &self.item.link
    }
}

/// Result of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No keyword returned any article inside the date range.
    NoArticles,
    /// Articles were found but none mentions a configured institution.
    NoMatches {
        /// Number of distinct articles that were fetched.
        fetched: usize,
    },
    /// Matching articles, newest first.
    Found(Vec<MatchedNewsItem>),
}

impl SearchOutcome {
    /// Short machine-readable status.
    pub fn status(&self) -> &'static str {
        match self {
            SearchOutcome::NoArticles => "no_articles",
            SearchOutcome::NoMatches { .. } => "no_matches",
            SearchOutcome::Found(_) => "found",
        }
    }

    /// Message shown to the user.
    pub fn message(&self) -> String {
        match self {
            SearchOutcome::NoArticles => "해당 기간 내에 검색된 기사가 없습니다.".to_string(),
            SearchOutcome::NoMatches { .. } => {
                "기사는 찾았으나 지정하신 학교명이 포함된 뉴스가 없습니다.".to_string()
            }
            SearchOutcome::Found(items) => {
                format!("검색 완료! 총 {}건의 대학 관련 뉴스를 찾았습니다.", items.len())
            }
        }
    }

    /// Matched items, empty unless the run found something.
    pub fn items(&self) -> &[MatchedNewsItem] {
        match self {
            SearchOutcome::Found(items) => items,
            _ => &[],
        }
    }

    /// Consume the outcome and return its items.
    pub fn into_items(self) -> Vec<MatchedNewsItem> {
        match self {
            SearchOutcome::Found(items) => items,
            _ => Vec::new(),
        }
    }
}
