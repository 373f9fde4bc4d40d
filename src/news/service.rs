//! Search orchestration.
//!
//! One run fetches every keyword in order, one request at a time, and feeds
//! the combined results through the pipeline.

use std::sync::Arc;

use tracing::info;

use crate::datetime::DateRange;
use crate::news::fetcher::FeedSource;
use crate::news::pipeline::{dedup_by_link, match_and_sort};
use crate::news::types::SearchOutcome;
use crate::settings::Settings;

/// Service running keyword searches against a feed source.
#[derive(Clone)]
pub struct NewsService {
    source: Arc<dyn FeedSource>,
}

impl NewsService {
    /// Create a new service over the given feed source.
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        Self { source }
    }

    /// Run one search with the given settings and date range.
    ///
    /// Keywords are fetched sequentially; each request completes before the
    /// next one starts. An empty keyword list performs no request.
    pub async fn run(&self, settings: &Settings, range: &DateRange) -> SearchOutcome {
        let mut raw = Vec::with_capacity(settings.keywords.len());
        for keyword in &settings.keywords {
            info!("collecting articles for '{}'", keyword);
            let items = self.source.fetch(keyword, range).await;
            raw.push((keyword.clone(), items));
        }

        let unique = dedup_by_link(raw);
        if unique.is_empty() {
            info!("no articles between {} and {}", range.start, range.end);
            return SearchOutcome::NoArticles;
        }

        let fetched = unique.len();
        let matched = match_and_sort(unique, &settings.institutions);
        if matched.is_empty() {
            info!("{} articles fetched, none mention an institution", fetched);
            return SearchOutcome::NoMatches { fetched };
        }

        info!("{} of {} articles matched", matched.len(), fetched);
        SearchOutcome::Found(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::types::NewsItem;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    /// Feed source answering from a fixed table and recording calls.
    struct StubSource {
        responses: HashMap<String, Vec<NewsItem>>,
        calls: Mutex<Vec<String>>,
    }

    impl StubSource {
        fn new(responses: Vec<(&str, Vec<NewsItem>)>) -> Self {
            Self {
                responses: responses
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl FeedSource for StubSource {
        async fn fetch(&self, keyword: &str, range: &DateRange) -> Vec<NewsItem> {
            self.calls.lock().unwrap().push(keyword.to_string());
            self.responses
                .get(keyword)
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .filter(|i| range.contains(i.published_on))
                .collect()
        }
    }

    fn settings(institutions: &[&str], keywords: &[&str]) -> Settings {
        Settings::new(
            institutions.iter().map(|s| s.to_string()).collect(),
            keywords.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn january() -> DateRange {
        DateRange::new(day(1), day(31))
    }

    #[tokio::test]
    async fn test_run_found() {
        let source = Arc::new(StubSource::new(vec![(
            "장학금",
            vec![
                NewsItem::new(day(5), "고려대 장학금 전달", "https://n.example.com/a"),
                NewsItem::new(day(20), "고려대 동문 기부", "https://n.example.com/b"),
            ],
        )]));
        let service = NewsService::new(source);

        let outcome = service
            .run(&settings(&["고려대"], &["장학금"]), &january())
            .await;

        let items = outcome.items();
        assert_eq!(outcome.status(), "found");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].published_on(), day(20));
        assert_eq!(items[1].published_on(), day(5));
    }

    #[tokio::test]
    async fn test_run_fetches_keywords_in_order() {
        let source = Arc::new(StubSource::new(vec![]));
        let service = NewsService::new(source.clone());

        let outcome = service
            .run(&settings(&["고려대"], &["장학금", "기부", "모금"]), &january())
            .await;

        assert_eq!(outcome, SearchOutcome::NoArticles);
        assert_eq!(
            *source.calls.lock().unwrap(),
            vec!["장학금", "기부", "모금"]
        );
    }

    #[tokio::test]
    async fn test_run_empty_keywords_performs_no_fetch() {
        let source = Arc::new(StubSource::new(vec![]));
        let service = NewsService::new(source.clone());

        let outcome = service.run(&settings(&["고려대"], &[]), &january()).await;

        assert_eq!(outcome, SearchOutcome::NoArticles);
        assert!(source.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_no_matches() {
        let source = Arc::new(StubSource::new(vec![(
            "기부",
            vec![
                NewsItem::new(day(5), "시청 기부 행사", "https://n.example.com/a"),
                NewsItem::new(day(6), "시청 기부 행사", "https://n.example.com/a"),
            ],
        )]));
        let service = NewsService::new(source);

        let outcome = service.run(&settings(&["고려대"], &["기부"]), &january()).await;

        assert_eq!(outcome, SearchOutcome::NoMatches { fetched: 1 });
    }

    #[tokio::test]
    async fn test_run_dedups_across_keywords() {
        let source = Arc::new(StubSource::new(vec![
            (
                "장학금",
                vec![NewsItem::new(day(5), "고려대 장학금", "https://n.example.com/a")],
            ),
            (
                "기부",
                vec![NewsItem::new(day(5), "연세대 기부", "https://n.example.com/a")],
            ),
        ]));
        let service = NewsService::new(source);

        let outcome = service
            .run(&settings(&["연세대", "고려대"], &["장학금", "기부"]), &january())
            .await;

        let items = outcome.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title(), "고려대 장학금");
        assert_eq!(items[0].institution, "고려대");
    }
}
