//! API handlers for the Web UI.

pub mod search;
pub mod settings;

pub use search::*;
pub use settings::*;

use chrono::NaiveDate;
use tokio::sync::{Mutex, RwLock};

use crate::config::SearchConfig;
use crate::datetime::{today_in, DateRange};
use crate::news::{MatchedNewsItem, NewsService};
use crate::settings::{Settings, SettingsStore};

/// Session state shared by all handlers.
pub struct AppState {
    /// Settings in effect for this session.
    pub settings: RwLock<Settings>,
    /// Backing file for the settings.
    pub store: SettingsStore,
    /// Search service.
    pub service: NewsService,
    /// Items of the last successful search, for CSV download.
    pub last_results: Mutex<Option<Vec<MatchedNewsItem>>>,
    /// Search defaults.
    pub search: SearchConfig,
}

impl AppState {
    /// Create the state for a new session.
    pub fn new(
        settings: Settings,
        store: SettingsStore,
        service: NewsService,
        search: SearchConfig,
    ) -> Self {
        Self {
            settings: RwLock::new(settings),
            store,
            service,
            last_results: Mutex::new(None),
            search,
        }
    }

    /// Today in the configured timezone.
    pub fn today(&self) -> NaiveDate {
        today_in(&self.search.timezone)
    }

    /// The look-back window ending today.
    pub fn default_range(&self) -> DateRange {
        DateRange::ending_on(self.today(), self.search.lookback_days)
    }
}
