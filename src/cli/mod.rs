//! Command-line interface
//!
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files + environment)
//! - Command dispatch to the run, check and preview handlers

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment, LogLevel};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;
use crate::logger::init_logger;

/// Load configuration the way `cli` selects it, apply CLI overrides and validate
pub fn load_and_merge_config(cli: &Cli) -> Result<Settings, ConfigError> {
    ConfigurationMerger::from_cli(cli)?.merge_cli_args(cli)
}

/// Initialize the global logger from settings
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(logger_config)
}
