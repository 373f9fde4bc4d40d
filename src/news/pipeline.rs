//! Merge, deduplicate, match and sort fetched articles.

use std::collections::HashSet;

use tracing::trace;

use crate::news::types::{MatchedNewsItem, NewsItem};

/// Flatten per-keyword results, keeping the first item seen for each link.
pub fn dedup_by_link(raw: Vec<(String, Vec<NewsItem>)>) -> Vec<NewsItem> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for (keyword, items) in raw {
        for item in items {
            if seen.insert(item.link.clone()) {
                unique.push(item);
            } else {
                trace!("'{}': duplicate link {}", keyword, item.link);
            }
        }
    }

    unique
}

/// The first institution, in configured order, contained in the title.
///
/// Matching is a case-sensitive substring test with no normalization.
pub fn match_institution<'a>(title: &str, institutions: &'a [String]) -> Option<&'a str> {
    institutions
        .iter()
        .find(|institution| title.contains(institution.as_str()))
        .map(String::as_str)
}

/// Tag each item with its institution, dropping items that match none, and
/// sort newest first.
///
/// The sort is stable, so items from the same day keep their input order.
pub fn match_and_sort(items: Vec<NewsItem>, institutions: &[String]) -> Vec<MatchedNewsItem> {
    let mut matched: Vec<MatchedNewsItem> = items
        .into_iter()
        .filter_map(|item| {
            let institution = match_institution(&item.title, institutions)?.to_string();
            Some(item.matched(institution))
        })
        .collect();

    matched.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
    matched
}

/// Run the whole pipeline over per-keyword fetch results.
pub fn process(
    raw: Vec<(String, Vec<NewsItem>)>,
    institutions: &[String],
) -> Vec<MatchedNewsItem> {
    match_and_sort(dedup_by_link(raw), institutions)
}
