//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments override file and environment configuration; the merged
//! result is validated once at the end.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

/// Applies CLI overrides on top of loaded settings
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load base settings the way the CLI selects them.
    ///
    /// `--config` switches to single-file mode and `--env` overrides
    /// `BOT_APP_ENV`. Validation is deferred to `merge_cli_args`.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;

        if let Some(path) = &cli.config {
            loader = loader.with_config_file(path);
        }
        if let Some(env) = cli.env {
            loader = loader.with_environment(env.into());
        }

        tracing::debug!(
            environment = loader.environment().as_str(),
            config_file = ?loader.config_file(),
            config_dir = %loader.config_dir().display(),
            "Loading configuration"
        );

        Ok(Self::new(loader.load_unvalidated()?))
    }

    /// Return a validated copy of the base settings with CLI overrides applied.
    ///
    /// Precedence, highest first: command options, global flags, base settings.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        Self::apply_global_overrides(&mut config, cli);

        if let Some(ref command) = cli.command {
            Self::apply_command_overrides(&mut config, command);
        }

        match cli.command {
            Some(Commands::Preview { .. }) => config.validate_without_notify()?,
            _ => config.validate()?,
        }

        Ok(config)
    }

    fn apply_global_overrides(config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    fn apply_command_overrides(config: &mut Settings, command: &Commands) {
        match command {
            Commands::Run {
                interval,
                log_level,
            } => {
                if let Some(interval) = interval {
                    config.refresh_frequency = format!("{}ms", interval.as_millis());
                }

                if let Some(level) = log_level {
                    config.logger.level = (*level).into();
                }
            }
            Commands::Check | Commands::Preview { .. } => {}
        }
    }
}
