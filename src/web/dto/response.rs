//! Response DTOs for Web API.

use serde::Serialize;

use crate::datetime::DateRange;
use crate::news::{MatchedNewsItem, SearchOutcome};
use crate::settings::Settings;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
    /// Non-fatal problem the user should see (e.g., settings not persisted).
    pub warning: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self {
            data,
            warning: None,
        }
    }

    /// Create a response carrying a warning.
    pub fn with_warning(data: T, warning: impl Into<String>) -> Self {
        Self {
            data,
            warning: Some(warning.into()),
        }
    }
}

/// Current settings.
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    /// Search keywords.
    pub keywords: Vec<String>,
    /// Institution names.
    pub institutions: Vec<String>,
}

impl From<&Settings> for SettingsResponse {
    fn from(settings: &Settings) -> Self {
        Self {
            keywords: settings.keywords.clone(),
            institutions: settings.institutions.clone(),
        }
    }
}

/// Result of a search run.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// `found`, `no_articles` or `no_matches`.
    pub status: &'static str,
    /// Message for the user.
    pub message: String,
    /// First day searched.
    pub start: String,
    /// Last day searched.
    pub end: String,
    /// Matched articles, newest first.
    pub items: Vec<MatchedNewsItem>,
}

impl SearchResponse {
    /// Build the response for an outcome.
    pub fn new(outcome: &SearchOutcome, range: &DateRange) -> Self {
        Self {
            status: outcome.status(),
            message: outcome.message(),
            start: range.start.to_string(),
            end: range.end.to_string(),
            items: outcome.items().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::NewsItem;
    use chrono::NaiveDate;

    #[test]
    fn test_api_response_serialize() {
        let json = serde_json::to_value(ApiResponse::new(1)).unwrap();
        assert_eq!(json["data"], 1);
        assert!(json["warning"].is_null());

        let json = serde_json::to_value(ApiResponse::with_warning(1, "not saved")).unwrap();
        assert_eq!(json["warning"], "not saved");
    }

    #[test]
    fn test_search_response_found() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let range = DateRange::new(day, day);
        let outcome = SearchOutcome::Found(vec![
            NewsItem::new(day, "고려대 기부", "https://n.example.com/a").matched("고려대")
        ]);

        let json = serde_json::to_value(SearchResponse::new(&outcome, &range)).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["start"], "2024-01-05");
        assert_eq!(json["items"][0]["school"], "고려대");
    }

    #[test]
    fn test_search_response_no_articles() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let response = SearchResponse::new(&SearchOutcome::NoArticles, &DateRange::new(day, day));
        assert_eq!(response.status, "no_articles");
        assert!(response.items.is_empty());
    }
}
