//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{CheckCommandHandler, PreviewCommandHandler, RunCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;

/// Execute a CLI command with merged and validated settings.
///
/// No subcommand means `run`.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Run { .. }) | None => RunCommandHandler::new(settings).execute().await,
        Some(Commands::Check) => CheckCommandHandler::new(settings).execute().await,
        Some(Commands::Preview { limit }) => {
            PreviewCommandHandler::new(settings)?.execute(*limit).await
        }
    }
}
