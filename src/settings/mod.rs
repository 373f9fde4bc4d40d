//! Keyword and institution settings.
//!
//! Settings are persisted as a small JSON document so they can be edited by
//! hand. Loading never fails: a missing or broken file yields the defaults.

pub mod store;
pub mod types;

pub use store::SettingsStore;
pub use types::{parse_list, Settings, DEFAULT_INSTITUTIONS, DEFAULT_KEYWORDS};
