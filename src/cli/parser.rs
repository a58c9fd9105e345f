//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Announces new OpenSalary salary entries on a Discord webhook
#[derive(Parser, Debug)]
#[command(name = "opensalary-bot")]
#[command(about = "Announces new OpenSalary salary entries on a Discord webhook")]
#[command(long_about = "
opensalary-bot polls the OpenSalary salary-entries API and posts one Discord
message per newly published entry. Entries present when the bot starts are
remembered but never announced.

EXAMPLES:
    # Poll with the configured interval (the default command)
    opensalary-bot run

    # Poll every 15 minutes
    opensalary-bot run --interval 15m

    # Use a single configuration file
    opensalary-bot --config /etc/opensalary-bot/bot.toml run

    # Validate configuration and exit
    opensalary-bot check

    # Render the newest entries without sending anything
    opensalary-bot preview --limit 3

Configuration is read from config/{default,<env>,local}.toml and BOT_*
environment variables, e.g. BOT_NOTIFY_WEBHOOK_URL, BOT_ERROR_WEBHOOK_URL
and BOT_REFRESH_FREQUENCY.
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Use a single TOML file instead of the layered configuration directory.
    /// The file must exist and be readable.
    ///
    /// Example: --config /etc/opensalary-bot/bot.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `<env>.toml` overlay is loaded.
    ///
    /// Available values: development (dev), test, staging (stage), production (prod)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Raises log output to debug level. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Lowers log output to error level. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll for new salary entries and notify (default)
    ///
    /// Runs until interrupted with Ctrl+C or SIGTERM, or until a notification
    /// cannot be delivered.
    ///
    /// Examples:
    ///   opensalary-bot run                     # Use the configured interval
    ///   opensalary-bot run --interval 30m      # Poll every 30 minutes
    Run {
        /// Delay between two polls
        ///
        /// Overrides refresh_frequency. Accepts "1h", "15m", "90s", "PT1H"
        /// or a bare number of seconds. Must be greater than zero.
        #[arg(short, long, value_name = "DURATION", value_parser = super::validation::validate_interval)]
        interval: Option<Duration>,

        /// Log level override
        ///
        /// Takes precedence over --verbose and --quiet.
        ///
        /// Available levels: error, warn, info, debug, trace
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,
    },
    /// Validate configuration and exit
    ///
    /// Returns exit code 0 if the configuration is valid, non-zero otherwise.
    Check,
    /// Fetch once and print the messages that would be sent
    ///
    /// Nothing is posted to any webhook, so no notification webhook URL is
    /// required.
    ///
    /// Examples:
    ///   opensalary-bot preview                 # Newest entry
    ///   opensalary-bot preview --limit 5       # Five newest entries
    Preview {
        /// Number of entries to render
        ///
        /// Must be between 1 and 50.
        #[arg(short, long, value_name = "COUNT", default_value = "1", value_parser = super::validation::validate_limit)]
        limit: usize,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
