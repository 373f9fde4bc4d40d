//! Configuration module for uninews.

use serde::Deserialize;
use std::path::Path;

use crate::{NewsError, Result};

/// News feed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Search feed endpoint (without query string).
    #[serde(default = "default_feed_endpoint")]
    pub endpoint: String,
    /// Result language (`hl` parameter).
    #[serde(default = "default_feed_language")]
    pub language: String,
    /// Result region (`gl` parameter).
    #[serde(default = "default_feed_region")]
    pub region: String,
    /// Edition identifier (`ceid` parameter).
    #[serde(default = "default_feed_ceid")]
    pub ceid: String,
    /// Total request timeout in seconds.
    #[serde(default = "default_feed_timeout")]
    pub timeout_secs: u64,
    /// Maximum response size in bytes.
    #[serde(default = "default_feed_max_size")]
    pub max_feed_size_bytes: u64,
    /// User agent sent with feed requests.
    #[serde(default = "default_feed_user_agent")]
    pub user_agent: String,
}

fn default_feed_endpoint() -> String {
    "https://news.google.com/rss/search".to_string()
}

fn default_feed_language() -> String {
    "ko".to_string()
}

fn default_feed_region() -> String {
    "KR".to_string()
}

fn default_feed_ceid() -> String {
    "KR:ko".to_string()
}

fn default_feed_timeout() -> u64 {
    10
}

fn default_feed_max_size() -> u64 {
    5 * 1024 * 1024 // 5MB
}

fn default_feed_user_agent() -> String {
    concat!("uninews/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: default_feed_endpoint(),
            language: default_feed_language(),
            region: default_feed_region(),
            ceid: default_feed_ceid(),
            timeout_secs: default_feed_timeout(),
            max_feed_size_bytes: default_feed_max_size(),
            user_agent: default_feed_user_agent(),
        }
    }
}

/// Settings file configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsConfig {
    /// Path to the JSON file holding keywords and institutions.
    #[serde(default = "default_settings_path")]
    pub path: String,
}

fn default_settings_path() -> String {
    "news_settings.json".to_string()
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            path: default_settings_path(),
        }
    }
}

/// Search defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// How many days before today the default range starts.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
    /// Timezone used to decide what "today" is (e.g., "Asia/Seoul").
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_lookback_days() -> i64 {
    14
}

fn default_timezone() -> String {
    "Asia/Seoul".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lookback_days: default_lookback_days(),
            timezone: default_timezone(),
        }
    }
}

/// CSV export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory where CSV reports are written.
    #[serde(default = "default_export_dir")]
    pub dir: String,
}

fn default_export_dir() -> String {
    ".".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

/// Web UI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Host address to bind.
    #[serde(default = "default_web_host")]
    pub host: String,
    /// Port number for the Web API.
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// CORS allowed origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_web_host() -> String {
    "127.0.0.1".to_string()
}

fn default_web_port() -> u16 {
    8501
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_web_host(),
            port: default_web_port(),
            cors_origins: vec![],
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/uninews.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Feed configuration.
    #[serde(default)]
    pub feed: FeedConfig,
    /// Settings file configuration.
    #[serde(default)]
    pub settings: SettingsConfig,
    /// Search defaults.
    #[serde(default)]
    pub search: SearchConfig,
    /// Export configuration.
    #[serde(default)]
    pub export: ExportConfig,
    /// Web UI configuration.
    #[serde(default)]
    pub web: WebConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(NewsError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| NewsError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `UNINEWS_SETTINGS_PATH`: Override the settings file path
    /// - `UNINEWS_FEED_ENDPOINT`: Override the feed endpoint
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("UNINEWS_SETTINGS_PATH") {
            if !path.is_empty() {
                self.settings.path = path;
            }
        }
        if let Ok(endpoint) = std::env::var("UNINEWS_FEED_ENDPOINT") {
            if !endpoint.is_empty() {
                self.feed.endpoint = endpoint;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The feed endpoint is not an http(s) URL
    /// - The feed timeout is zero
    /// - The search timezone is unknown
    pub fn validate(&self) -> Result<()> {
        let endpoint = url::Url::parse(&self.feed.endpoint)
            .map_err(|e| NewsError::Config(format!("invalid feed endpoint: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(NewsError::Config(format!(
                "unsupported feed endpoint scheme: {}",
                endpoint.scheme()
            )));
        }
        if self.feed.timeout_secs == 0 {
            return Err(NewsError::Config(
                "feed.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.search.timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(NewsError::Config(format!(
                "unknown timezone: {}",
                self.search.timezone
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.feed.endpoint, "https://news.google.com/rss/search");
        assert_eq!(config.feed.language, "ko");
        assert_eq!(config.feed.region, "KR");
        assert_eq!(config.feed.ceid, "KR:ko");
        assert_eq!(config.feed.timeout_secs, 10);
        assert_eq!(config.feed.max_feed_size_bytes, 5 * 1024 * 1024);
        assert!(config.feed.user_agent.starts_with("uninews/"));

        assert_eq!(config.settings.path, "news_settings.json");

        assert_eq!(config.search.lookback_days, 14);
        assert_eq!(config.search.timezone, "Asia/Seoul");

        assert_eq!(config.export.dir, ".");

        assert_eq!(config.web.host, "127.0.0.1");
        assert_eq!(config.web.port, 8501);
        assert!(config.web.cors_origins.is_empty());

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, "logs/uninews.log");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[feed]
endpoint = "http://127.0.0.1:9000/rss"
language = "en"
region = "US"
ceid = "US:en"
timeout_secs = 3
max_feed_size_bytes = 1024
user_agent = "test-agent"

[settings]
path = "custom/settings.json"

[search]
lookback_days = 7
timezone = "UTC"

[export]
dir = "reports"

[web]
host = "0.0.0.0"
port = 3000
cors_origins = ["http://localhost:5173"]

[logging]
level = "debug"
file = "custom/logs/app.log"
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.feed.endpoint, "http://127.0.0.1:9000/rss");
        assert_eq!(config.feed.language, "en");
        assert_eq!(config.feed.region, "US");
        assert_eq!(config.feed.ceid, "US:en");
        assert_eq!(config.feed.timeout_secs, 3);
        assert_eq!(config.feed.max_feed_size_bytes, 1024);
        assert_eq!(config.feed.user_agent, "test-agent");

        assert_eq!(config.settings.path, "custom/settings.json");

        assert_eq!(config.search.lookback_days, 7);
        assert_eq!(config.search.timezone, "UTC");

        assert_eq!(config.export.dir, "reports");

        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.web.port, 3000);
        assert_eq!(config.web.cors_origins, vec!["http://localhost:5173"]);

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, "custom/logs/app.log");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[feed]
timeout_secs = 30
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.feed.timeout_secs, 30);
        assert_eq!(config.feed.language, "ko");
        assert_eq!(config.settings.path, "news_settings.json");
        assert_eq!(config.search.lookback_days, 14);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.feed.endpoint, "https://news.google.com/rss/search");
        assert_eq!(config.web.port, 8501);
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("this is not valid toml [[[");

        assert!(result.is_err());
        if let Err(NewsError::Config(msg)) = result {
            assert!(msg.contains("config parse error"));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load("nonexistent.toml");
        assert!(matches!(result, Err(NewsError::Io(_))));
    }

    #[test]
    fn test_apply_env_overrides() {
        let original = std::env::var("UNINEWS_FEED_ENDPOINT").ok();

        std::env::set_var("UNINEWS_FEED_ENDPOINT", "http://feeds.example.com/search");
        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.feed.endpoint, "http://feeds.example.com/search");

        // Empty values are ignored
        std::env::set_var("UNINEWS_FEED_ENDPOINT", "");
        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.feed.endpoint, "https://news.google.com/rss/search");

        if let Some(val) = original {
            std::env::set_var("UNINEWS_FEED_ENDPOINT", val);
        } else {
            std::env::remove_var("UNINEWS_FEED_ENDPOINT");
        }
    }

    #[test]
    fn test_load_with_env_overrides_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[settings]\npath = \"from_file.json\"\n\n[search]\nlookback_days = 7\n",
        )
        .unwrap();

        let original = std::env::var("UNINEWS_SETTINGS_PATH").ok();
        std::env::set_var("UNINEWS_SETTINGS_PATH", "/tmp/from_env.json");
        let config = Config::load_with_env(&path).unwrap();

        if let Some(val) = original {
            std::env::set_var("UNINEWS_SETTINGS_PATH", val);
        } else {
            std::env::remove_var("UNINEWS_SETTINGS_PATH");
        }

        assert_eq!(config.settings.path, "/tmp/from_env.json");
        assert_eq!(config.search.lookback_days, 7);
    }

    #[test]
    fn test_load_with_env_missing_file() {
        let result = Config::load_with_env("nonexistent.toml");
        assert!(matches!(result, Err(NewsError::Io(_))));
    }

    #[test]
    fn test_validate_default() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_endpoint() {
        let mut config = Config::default();
        config.feed.endpoint = "ftp://example.com/rss".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unsupported feed endpoint scheme"));

        config.feed.endpoint = "not a url".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("invalid feed endpoint"));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.feed.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_unknown_timezone() {
        let mut config = Config::default();
        config.search.timezone = "Mars/Olympus".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unknown timezone"));
    }
}
