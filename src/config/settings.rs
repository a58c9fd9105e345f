//! Configuration settings structures
//!
//! Everything here can be loaded from TOML files and `BOT_*` environment
//! variables. The three top-level webhook/interval keys are flat so that
//! `BOT_ERROR_WEBHOOK_URL`, `BOT_NOTIFY_WEBHOOK_URL` and
//! `BOT_REFRESH_FREQUENCY` map onto them directly.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};
use crate::models::DEFAULT_SITE_URL;
use crate::utils::money::DEFAULT_CURRENCY_SYMBOL;

// ============================================================================
// Default value functions
// ============================================================================

fn default_refresh_frequency() -> String {
    "1h".to_string()
}

fn default_api_url() -> String {
    "https://api.opensalary.jp".to_string()
}

fn default_site_url() -> String {
    DEFAULT_SITE_URL.to_string()
}

fn default_job_role() -> String {
    "software-engineer".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_username() -> String {
    "OpenSalary".to_string()
}

fn default_content() -> String {
    "New salary submitted".to_string()
}

fn default_color() -> u32 {
    15258703
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/bot.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

// ============================================================================
// Salary source
// ============================================================================

/// Where and what to poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the salary API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Public site hosting entry and company pages
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Job role filter
    #[serde(default = "default_job_role")]
    pub job_role: String,

    /// Locale filter
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            site_url: default_site_url(),
            job_role: default_job_role(),
            locale: default_locale(),
        }
    }
}

// ============================================================================
// Notifier
// ============================================================================

/// How new entries are rendered and what happens when delivery fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Webhook display name
    #[serde(default = "default_username")]
    pub username: String,

    /// Text sent above each embed
    #[serde(default = "default_content")]
    pub content: String,

    /// Embed accent color (decimal RGB)
    #[serde(default = "default_color")]
    pub color: u32,

    /// Symbol placed in front of every amount
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Log failed deliveries and keep going instead of stopping the bot
    #[serde(default)]
    pub continue_on_error: bool,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            content: default_content(),
            color: default_color(),
            currency_symbol: default_currency_symbol(),
            continue_on_error: false,
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_log_path")]
    pub path: String,

    /// Append to an existing file instead of truncating it
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: true,
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub console: ConsoleSettings,

    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert the file representation into the runtime LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self
            .file
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::validation("logger.file.format", e.to_string()))?;

        let console = ConsoleConfig::new(self.console.enabled, self.console.colored);
        let file = FileConfig::new(
            self.file.enabled,
            PathBuf::from(self.file.path),
            self.file.append,
            format,
        );

        LoggerConfig::new(console, file, self.level)
            .map_err(|e| ConfigError::validation("logger", e.to_string()))
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Webhook receiving fetch failures; empty means failures are only logged
    #[serde(default)]
    pub error_webhook_url: String,

    /// Webhook receiving one message per new salary entry
    #[serde(default)]
    pub notify_webhook_url: String,

    /// Delay between two polls, e.g. "1h", "15m", "90s" or "PT1H"
    #[serde(default = "default_refresh_frequency")]
    pub refresh_frequency: String,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub notifier: NotifierConfig,

    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            error_webhook_url: String::new(),
            notify_webhook_url: String::new(),
            refresh_frequency: default_refresh_frequency(),
            source: SourceConfig::default(),
            notifier: NotifierConfig::default(),
            logger: LoggerSettings::default(),
        }
    }
}

impl Settings {
    /// Parsed `refresh_frequency`
    pub fn refresh_interval(&self) -> Result<Duration, ConfigError> {
        parse_interval(&self.refresh_frequency)
    }

    /// Error webhook, if one is configured
    pub fn error_webhook(&self) -> Option<&str> {
        let url = self.error_webhook_url.trim();
        (!url.is_empty()).then_some(url)
    }
}

/// Parse a human or ISO-8601 duration. A bare integer is read as seconds.
pub fn parse_interval(raw: &str) -> Result<Duration, ConfigError> {
    let raw = raw.trim();
    let invalid = |message: String| ConfigError::validation("refresh_frequency", message);

    if let Ok(seconds) = raw.parse::<u64>() {
        return Ok(Duration::from_secs(seconds));
    }

    let signed: jiff::SignedDuration = raw.parse().map_err(|e: jiff::Error| {
        invalid(format!(
            "Invalid duration '{}': {}. Use a value like \"1h\", \"15m\" or \"90s\".",
            raw, e
        ))
    })?;

    Duration::try_from(signed)
        .map_err(|_| invalid(format!("Duration '{}' must not be negative.", raw)))
}
