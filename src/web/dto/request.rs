//! Request DTOs for Web API.

use chrono::NaiveDate;
use serde::Deserialize;

/// Settings update request.
///
/// Both fields are comma-separated lists as typed by the user. A missing
/// field leaves the current list unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    /// Comma-separated keywords.
    #[serde(default)]
    pub keywords: Option<String>,
    /// Comma-separated institution names.
    #[serde(default)]
    pub institutions: Option<String>,
}

/// Search request.
///
/// Missing dates default to the configured look-back window ending today.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    /// First day, inclusive (`YYYY-MM-DD`).
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Last day, inclusive (`YYYY-MM-DD`).
    #[serde(default)]
    pub end: Option<NaiveDate>,
}
