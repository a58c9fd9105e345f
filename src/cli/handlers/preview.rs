//! Preview command handler
//!
//! Fetches the newest entries once and prints the webhook bodies that `run`
//! would post for them.

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::external::{OpenSalaryClient, SalarySource};
use crate::models::WebhookMessage;
use crate::services::notifications::DiscordWebhookProvider;
use crate::watcher::SalaryNotifier;

/// Handler for the preview command
pub struct PreviewCommandHandler {
    config: Settings,
    source: Arc<dyn SalarySource>,
}

impl PreviewCommandHandler {
    pub fn new(config: Settings) -> AppResult<Self> {
        let source = Arc::new(OpenSalaryClient::new(&config.source)?);
        Ok(Self::with_source(config, source))
    }

    pub fn with_source(config: Settings, source: Arc<dyn SalarySource>) -> Self {
        Self { config, source }
    }

    /// Render at most `limit` entries in API order
    pub async fn render(&self, limit: usize) -> AppResult<Vec<WebhookMessage>> {
        let entries = self.source.fetch_entries().await?;
        let notifier = SalaryNotifier::new(
            Arc::new(DiscordWebhookProvider::new(&self.config.notify_webhook_url)),
            self.config.notifier.clone(),
            self.config.source.site_url.clone(),
        );

        Ok(entries
            .iter()
            .take(limit)
            .map(|entry| notifier.render(entry))
            .collect())
    }

    pub async fn execute(&self, limit: usize) -> AppResult<()> {
        let messages = self.render(limit).await?;
        if messages.is_empty() {
            println!("No salary entries returned by {}", self.source.name());
            return Ok(());
        }

        for message in &messages {
            let body = serde_json::to_string_pretty(message)
                .map_err(|e| AppError::Internal { source: e.into() })?;
            println!("{}", body);
        }
        Ok(())
    }
}
