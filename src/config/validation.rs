//! Configuration validation logic

use reqwest::Url;

use crate::config::error::ConfigError;
use crate::config::settings::{
    FileSettings, LoggerSettings, NotifierConfig, Settings, SourceConfig,
};

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Upper bound on a Discord webhook display name
const MAX_USERNAME_LEN: usize = 80;

/// Colors are 24-bit RGB
const MAX_COLOR: u32 = 0xFF_FF_FF;

/// Check that `value` is an absolute http(s) URL
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value.trim()).map_err(|e| {
        ConfigError::validation(field, format!("Invalid URL '{}': {}", value, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::validation(
            field,
            format!("Unsupported URL scheme '{}'. Expected http or https.", scheme),
        )),
    }
}

impl SourceConfig {
    /// # Validation Rules
    /// - `api_url` and `site_url` must be http(s) URLs
    /// - `job_role` and `locale` must not be blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_http_url("source.api_url", &self.api_url)?;
        validate_http_url("source.site_url", &self.site_url)?;

        if self.job_role.trim().is_empty() {
            return Err(ConfigError::validation(
                "source.job_role",
                "Job role filter cannot be empty.",
            ));
        }

        if self.locale.trim().is_empty() {
            return Err(ConfigError::validation(
                "source.locale",
                "Locale filter cannot be empty.",
            ));
        }

        Ok(())
    }
}

impl NotifierConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let username = self.username.trim();
        if username.is_empty() || username.chars().count() > MAX_USERNAME_LEN {
            return Err(ConfigError::validation(
                "notifier.username",
                format!("Username must be between 1 and {} characters.", MAX_USERNAME_LEN),
            ));
        }

        if self.color > MAX_COLOR {
            return Err(ConfigError::ValidationError {
                field: "notifier.color".to_string(),
                message: format!(
                    "Color {} is out of range. Expected a 24-bit RGB value (0-{}).",
                    self.color, MAX_COLOR
                ),
            });
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - At least one of console or file output must be enabled
    /// - File settings must be consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validate all configuration settings, returning the first error found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notify_webhook_url.trim().is_empty() {
            return Err(ConfigError::validation(
                "notify_webhook_url",
                "Notification webhook URL is required. Set BOT_NOTIFY_WEBHOOK_URL.",
            ));
        }
        validate_http_url("notify_webhook_url", &self.notify_webhook_url)?;

        self.validate_without_notify()
    }

    /// Everything but the notification webhook, for commands that never post
    pub fn validate_without_notify(&self) -> Result<(), ConfigError> {
        if let Some(url) = self.error_webhook() {
            validate_http_url("error_webhook_url", url)?;
        }

        if self.refresh_interval()?.is_zero() {
            return Err(ConfigError::validation(
                "refresh_frequency",
                "Refresh frequency must be greater than zero.",
            ));
        }

        self.source.validate()?;
        self.notifier.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
