//! Logging configuration and initialization for uninews.
//!
//! Logs go to stderr so that the report printed by the `run` command on
//! stdout stays clean and can be piped.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

/// Unknown names fall back to `info`.
fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Raise the configured level by the number of `-v` flags given on the
/// command line. Never lowers it.
pub fn effective_level(configured: &str, verbose: u8) -> String {
    let base = parse_level(configured);
    let raised = match verbose {
        0 => base,
        1 if base > Level::DEBUG => base,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    raised.to_string().to_lowercase()
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(parse_level(level).into())
}

/// Open the log file, creating its directory. Truncates an existing file.
fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    File::create(path)
}

/// Install the global subscriber writing to stderr and `config.file`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let log_file = Arc::new(open_log_file(Path::new(&config.file))?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr.and(log_file))
                .with_ansi(false),
        )
        .with(env_filter(&config.level))
        .init();

    Ok(())
}

/// Install a stderr-only subscriber, for when the log file is unusable.
pub fn init_console_only(level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(level))
        .init();
}
