//! Date utilities for uninews.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Number of leading characters of a feed timestamp kept before parsing.
///
/// `"Fri, 05 Jan 2024 08:00:00 GMT"` becomes `"Fri, 05 Jan 2024"`; time of day
/// and zone are dropped and only the calendar day survives.
pub const FEED_DATE_PREFIX_LEN: usize = 16;

/// Formats accepted for the truncated date prefix, tried in order.
///
/// A leading weekday (`"Fri, "`) is removed beforehand and never checked
/// against the date. Text after the date is ignored.
const DATE_FORMATS: &[&str] = &["%d %b %Y", "%Y-%m-%d"];

/// Formats with a time component (ISO 8601 prefixes).
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// An inclusive range of calendar days.
///
/// A range whose start is after its end is empty rather than invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day, inclusive.
    pub start: NaiveDate,
    /// Last day, inclusive.
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Range covering `lookback_days` days before `today` through `today`.
    pub fn ending_on(today: NaiveDate, lookback_days: i64) -> Self {
        Self {
            start: today - Duration::days(lookback_days),
            end: today,
        }
    }

    /// Check whether a day falls inside the range.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Check whether no day can fall inside the range.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Today's date in the given timezone.
///
/// Unknown timezone names fall back to UTC.
pub fn today_in(timezone: &str) -> NaiveDate {
    let now = Utc::now();
    match timezone.parse::<Tz>() {
        Ok(tz) => now.with_timezone(&tz).date_naive(),
        Err(_) => now.date_naive(),
    }
}

/// Parse a `YYYY-MM-DD` date given by the user.
pub fn parse_user_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Parse the calendar day out of a raw feed timestamp.
///
/// Only the first [`FEED_DATE_PREFIX_LEN`] characters are considered.
pub fn parse_feed_date(raw: &str) -> Option<NaiveDate> {
    let prefix: String = raw.trim().chars().take(FEED_DATE_PREFIX_LEN).collect();
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(prefix, format) {
            return Some(dt.date());
        }
    }

    let day = strip_weekday(prefix);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_and_remainder(day, format).ok())
        .map(|(date, _)| date)
}

fn strip_weekday(s: &str) -> &str {
    match s.split_once(',') {
        Some((weekday, rest)) if weekday.chars().all(|c| c.is_ascii_alphabetic()) => rest.trim(),
        _ => s,
    }
}

/// Feed timestamp parser handed to the feed parser.
///
/// The day is returned as midnight UTC so that converting back with
/// `date_naive()` yields exactly the day written in the feed.
pub fn feed_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    parse_feed_date(raw)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
