use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::state::WatchState;
use crate::error::AppError;
use crate::external::SalarySource;
use crate::models::{SalaryEntry, WebhookMessage};
use crate::services::notifications::NotificationProvider;

/// Posts fetch failures to the error webhook
#[derive(Clone)]
pub struct ErrorReporter {
    provider: Arc<dyn NotificationProvider>,
    username: String,
}

impl ErrorReporter {
    pub fn new(provider: Arc<dyn NotificationProvider>, username: impl Into<String>) -> Self {
        Self {
            provider,
            username: username.into(),
        }
    }

    pub fn message(&self, error: &AppError) -> WebhookMessage {
        WebhookMessage::text(
            self.username.clone(),
            format!("could not fetch salaries: {}", error),
        )
    }

    /// Best effort: a failed report is logged and otherwise ignored
    pub async fn report(&self, error: &AppError) {
        let provider = self.provider.name();
        let delivered = match self.provider.send(&self.message(error)).await {
            Ok(result) => result.into_delivery(provider).map(|_| ()),
            Err(e) => Err(e),
        };

        if let Err(e) = delivered {
            tracing::warn!(provider, error = %e, "Failed to report fetch failure");
        }
    }
}

/// Summary of one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Fetch succeeded; `forwarded` entries were queued for notification
    Fetched { fetched: usize, forwarded: usize },
    /// Fetch failed; state left untouched
    Failed,
    /// The notifier is gone, nothing more can be delivered
    QueueClosed,
}

/// Producer side of the watcher.
///
/// Owns the diff state; nothing else reads or writes it.
pub struct SalaryPoller {
    source: Arc<dyn SalarySource>,
    state: WatchState,
    queue: mpsc::UnboundedSender<SalaryEntry>,
    error_reporter: Option<ErrorReporter>,
    interval: Duration,
}

impl SalaryPoller {
    pub fn new(
        source: Arc<dyn SalarySource>,
        queue: mpsc::UnboundedSender<SalaryEntry>,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            state: WatchState::new(),
            queue,
            error_reporter: None,
            interval,
        }
    }

    pub fn with_error_reporter(mut self, reporter: Option<ErrorReporter>) -> Self {
        self.error_reporter = reporter;
        self
    }

    pub fn state(&self) -> &WatchState {
        &self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fetch once, diff against what was seen and queue new entries.
    ///
    /// The state counts as initialized after the first tick even when that
    /// tick failed.
    pub async fn tick(&mut self) -> TickOutcome {
        let outcome = match self.source.fetch_entries().await {
            Ok(entries) => {
                let fetched = entries.len();
                let fresh = self.state.absorb(entries);
                let forwarded = fresh.len();

                if fresh.into_iter().any(|entry| self.queue.send(entry).is_err()) {
                    TickOutcome::QueueClosed
                } else {
                    tracing::info!(
                        source = self.source.name(),
                        fetched,
                        forwarded,
                        seen = self.state.seen().len(),
                        "Salary poll finished"
                    );
                    TickOutcome::Fetched { fetched, forwarded }
                }
            }
            Err(e) => {
                if e.is_recoverable() {
                    tracing::warn!(source = self.source.name(), error = %e, "Could not fetch salaries");
                } else {
                    tracing::error!(source = self.source.name(), error = ?e, "Could not fetch salaries");
                }
                if let Some(reporter) = &self.error_reporter {
                    reporter.report(&e).await;
                }
                TickOutcome::Failed
            }
        };

        self.state.mark_initialized();
        outcome
    }

    /// Poll until cancelled or until the notifier goes away
    pub async fn run(mut self, cancel: CancellationToken) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "Salary poller started"
        );

        loop {
            tracing::info!("Fetching new salaries...");
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                outcome = self.tick() => outcome,
            };

            if outcome == TickOutcome::QueueClosed {
                tracing::warn!("Notification queue closed");
                break;
            }

            let interval = self.interval;
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = self.queue.closed() => {
                    tracing::warn!("Notification queue closed");
                    break;
                }
                _ = tokio::time::sleep(interval) => {}
            }
        }

        tracing::info!("Salary poller stopped");
    }
}
