//! Core notification provider trait and types.

use crate::error::{AppError, AppResult};
use crate::models::WebhookMessage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of a notification send attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// Whether send was successful
    pub success: bool,
    /// HTTP status code, if a response was received
    pub status_code: Option<u16>,
    /// Response body or transport error message
    pub response: Option<String>,
    /// Time taken for the operation in milliseconds
    pub duration_ms: u64,
}

impl NotificationResult {
    /// Turn an unsuccessful attempt into `AppError::Notification`
    pub fn into_delivery(self, provider: &str) -> AppResult<Self> {
        if self.success {
            return Ok(self);
        }

        let status = self
            .status_code
            .map(|code| format!("HTTP {}", code))
            .unwrap_or_else(|| "no response".to_string());
        let detail = self.response.as_deref().unwrap_or_default();
        let message = if detail.is_empty() {
            status
        } else {
            format!("{}: {}", status, detail)
        };

        Err(AppError::Notification {
            provider: provider.to_string(),
            message,
        })
    }
}

/// Trait for notification sinks.
///
/// Uses `async_trait` for dynamic dispatch; the watcher holds providers as
/// `Arc<dyn NotificationProvider>`.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Deliver a message.
    ///
    /// Transport failures and non-success statuses are reported through
    /// `NotificationResult::success` rather than `Err`, so callers decide
    /// whether a failed delivery is fatal.
    async fn send(&self, message: &WebhookMessage) -> AppResult<NotificationResult>;

    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Validates provider configuration (optional, default no-op)
    async fn validate_config(&self) -> AppResult<()> {
        Ok(())
    }
}
