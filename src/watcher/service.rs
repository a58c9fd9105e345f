use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::notifier::SalaryNotifier;
use super::poller::{ErrorReporter, SalaryPoller};
use crate::config::Settings;
use crate::error::{AppError, AppResult};
use crate::external::{OpenSalaryClient, SalarySource};
use crate::services::notifications::DiscordWebhookProvider;

/// Wires a salary source to a notifier through an unbounded queue
pub struct WatchService {
    source: Arc<dyn SalarySource>,
    notifier: SalaryNotifier,
    error_reporter: Option<ErrorReporter>,
    interval: Duration,
}

impl WatchService {
    pub fn new(source: Arc<dyn SalarySource>, notifier: SalaryNotifier, interval: Duration) -> Self {
        Self {
            source,
            notifier,
            error_reporter: None,
            interval,
        }
    }

    pub fn with_error_reporter(mut self, reporter: ErrorReporter) -> Self {
        self.error_reporter = Some(reporter);
        self
    }

    /// Production wiring: OpenSalary API in, Discord webhooks out
    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        let interval = settings.refresh_interval()?;
        let source = OpenSalaryClient::new(&settings.source)?;

        let notify = DiscordWebhookProvider::new(settings.notify_webhook_url.trim());
        let notifier = SalaryNotifier::new(
            Arc::new(notify),
            settings.notifier.clone(),
            settings.source.site_url.clone(),
        );

        let mut service = Self::new(Arc::new(source), notifier, interval);
        match settings.error_webhook() {
            Some(url) => {
                let provider = Arc::new(DiscordWebhookProvider::new(url));
                service = service.with_error_reporter(ErrorReporter::new(
                    provider,
                    settings.notifier.username.clone(),
                ));
            }
            None => tracing::warn!("No error webhook configured, fetch failures are only logged"),
        }

        Ok(service)
    }

    /// Spawn the poller and the notifier. Must be called inside a tokio runtime.
    pub fn start(self) -> WatchHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let poller = SalaryPoller::new(self.source, tx, self.interval)
            .with_error_reporter(self.error_reporter);
        let producer = tokio::spawn(poller.run(cancel.child_token()));
        let consumer = tokio::spawn(self.notifier.run(rx));

        tracing::info!(interval_secs = self.interval.as_secs(), "Watch service started");

        WatchHandle {
            cancel,
            producer,
            consumer,
        }
    }
}

/// Running watch service
pub struct WatchHandle {
    cancel: CancellationToken,
    producer: JoinHandle<()>,
    consumer: JoinHandle<AppResult<()>>,
}

impl WatchHandle {
    /// Stop polling. Entries already queued are still delivered.
    pub fn stop(&self) {
        tracing::info!("Stopping watch service");
        self.cancel.cancel();
    }

    /// Token that stops the service when cancelled, for signal handlers
    pub fn stop_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Wait for the notifier to finish and return its result.
    ///
    /// A fatal notifier error also stops the poller.
    pub async fn wait(self) -> AppResult<()> {
        let result = match self.consumer.await {
            Ok(result) => result,
            Err(e) => Err(AppError::Internal { source: e.into() }),
        };

        self.cancel.cancel();
        if let Err(e) = self.producer.await {
            tracing::error!(error = %e, "Salary poller task failed");
        }

        tracing::info!("Watch service stopped");
        result
    }
}
