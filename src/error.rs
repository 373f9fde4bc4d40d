//! Error types for uninews.

use thiserror::Error;

/// Common error type for uninews.
#[derive(Error, Debug)]
pub enum NewsError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Feed fetch or parse error.
    #[error("feed error: {0}")]
    Feed(String),

    /// Settings file error.
    ///
    /// Only raised on save; loading always falls back to defaults.
    #[error("settings error: {0}")]
    Settings(String),

    /// CSV export error.
    #[error("export error: {0}")]
    Export(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Result type alias for uninews operations.
pub type Result<T> = std::result::Result<T, NewsError>;
