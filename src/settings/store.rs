//! JSON file persistence for settings.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::settings::types::Settings;
use crate::{NewsError, Result};

/// Loads and saves [`Settings`] from a JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to the defaults.
    ///
    /// A missing file, an unreadable file and a file that does not parse are
    /// all treated the same way. This never returns an error.
    pub fn load(&self) -> Settings {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!(
                    "settings file {} not readable ({}), using defaults",
                    self.path.display(),
                    e
                );
                return Settings::default();
            }
        };

        match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!(
                    "loaded {} keywords and {} institutions from {}",
                    settings.keywords.len(),
                    settings.institutions.len(),
                    self.path.display()
                );
                settings
            }
            Err(e) => {
                warn!(
                    "settings file {} is corrupt ({}), using defaults",
                    self.path.display(),
                    e
                );
                Settings::default()
            }
        }
    }

    /// Write settings to the backing file.
    ///
    /// Text is written as UTF-8 without escaping non-ASCII characters.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| NewsError::Settings(format!("failed to serialize settings: {e}")))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    NewsError::Settings(format!(
                        "failed to create {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        fs::write(&self.path, json).map_err(|e| {
            NewsError::Settings(format!(
                "failed to write {}: {e}",
                self.path.display()
            ))
        })?;

        info!("settings saved to {}", self.path.display());
        Ok(())
    }
}
