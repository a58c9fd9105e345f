//! Discord webhook notification provider.
//!
//! Posts `WebhookMessage` bodies to an execute-webhook URL using the global
//! `HTTP_CLIENT`.

use super::provider::{NotificationProvider, NotificationResult};
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use crate::models::WebhookMessage;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Instant;

/// Discord (or Discord-compatible) webhook provider
///
/// # Example
/// ```ignore
/// let provider = DiscordWebhookProvider::new("https://discord.com/api/webhooks/1/token");
/// let result = provider.send(&WebhookMessage::text("OpenSalary", "hello")).await?;
/// ```
#[derive(Clone)]
pub struct DiscordWebhookProvider {
    url: String,
}

impl DiscordWebhookProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Host part of the webhook URL; the path carries the webhook token and is never logged
    pub fn host(&self) -> String {
        Url::parse(&self.url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| "<invalid>".to_string())
    }
}

impl std::fmt::Debug for DiscordWebhookProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordWebhookProvider")
            .field("host", &self.host())
            .finish()
    }
}

#[async_trait]
impl NotificationProvider for DiscordWebhookProvider {
    /// POST the message as JSON; any 2xx counts as delivered
    async fn send(&self, message: &WebhookMessage) -> AppResult<NotificationResult> {
        let start = Instant::now();
        let response = HTTP_CLIENT.post(&self.url).json(message).send().await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match response {
            Ok(resp) => {
                let status = resp.status();
                let response_text = resp.text().await.ok().filter(|text| !text.is_empty());

                tracing::debug!(
                    provider = self.name(),
                    host = %self.host(),
                    status = status.as_u16(),
                    duration_ms,
                    "Webhook responded"
                );

                Ok(NotificationResult {
                    success: status.is_success(),
                    status_code: Some(status.as_u16()),
                    response: response_text,
                    duration_ms,
                })
            }
            Err(e) => Ok(NotificationResult {
                success: false,
                status_code: None,
                response: Some(e.to_string()),
                duration_ms,
            }),
        }
    }

    fn name(&self) -> &'static str {
        "discord"
    }

    /// The URL must be an absolute http(s) URL with a path
    async fn validate_config(&self) -> AppResult<()> {
        let url = Url::parse(&self.url).map_err(|_| AppError::Validation {
            field: "url".to_string(),
            reason: "Invalid URL format".to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Validation {
                field: "url".to_string(),
                reason: "Only HTTP(S) URLs are allowed".to_string(),
            });
        }

        if url.path() == "/" {
            return Err(AppError::Validation {
                field: "url".to_string(),
                reason: "Webhook URL has no path".to_string(),
            });
        }

        Ok(())
    }
}
