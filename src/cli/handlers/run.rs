//! Run command handler
//!
//! Starts the watch service and keeps it running until a shutdown signal or
//! a fatal notifier error.

use tokio::signal;

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::services::notifications::DiscordWebhookProvider;
use crate::watcher::WatchService;

/// Handler for the run command
pub struct RunCommandHandler {
    config: Settings,
}

impl RunCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Run the bot until Ctrl+C/SIGTERM or until notifying fails
    pub async fn execute(self) -> AppResult<()> {
        tracing::info!(
            app_version = crate::pkg_version(),
            refresh_frequency = %self.config.refresh_frequency,
            api_url = %self.config.source.api_url,
            job_role = %self.config.source.job_role,
            notify_host = %DiscordWebhookProvider::new(&self.config.notify_webhook_url).host(),
            error_webhook = self.config.error_webhook().is_some(),
            "Application starting"
        );

        let handle = WatchService::from_settings(&self.config)?.start();

        let stop = handle.stop_token();
        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown_signal() => stop.cancel(),
                _ = stop.cancelled() => {}
            }
        });

        handle.wait().await
    }
}

/// Waits for Ctrl+C or SIGTERM.
///
/// A handler that cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, stopping");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, stopping");
        }
    }
}
