use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::NotifierConfig;
use crate::error::AppResult;
use crate::models::{Embed, EmbedAuthor, EmbedField, SalaryEntry, WebhookMessage};
use crate::services::notifications::{NotificationProvider, NotificationResult};
use crate::utils::money::MoneyFormatter;

/// Webhooks reject empty field values
const EMPTY_VALUE: &str = "-";

fn text_value(value: &str) -> String {
    if value.trim().is_empty() {
        EMPTY_VALUE.to_string()
    } else {
        value.to_string()
    }
}

/// Consumer side of the watcher: one webhook message per queued entry
pub struct SalaryNotifier {
    provider: Arc<dyn NotificationProvider>,
    money: MoneyFormatter,
    config: NotifierConfig,
    site_url: String,
}

impl SalaryNotifier {
    pub fn new(
        provider: Arc<dyn NotificationProvider>,
        config: NotifierConfig,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            money: MoneyFormatter::new(config.currency_symbol.clone()),
            config,
            site_url: site_url.into(),
        }
    }

    pub fn render(&self, entry: &SalaryEntry) -> WebhookMessage {
        let company = &entry.company;
        let fields = vec![
            EmbedField::inline("Role", text_value(&entry.role_title)),
            EmbedField::inline("Focus", text_value(&entry.role_focus)),
            EmbedField::inline("Grade", text_value(&entry.grade)),
            EmbedField::inline("Salary", self.money.format(entry.annual_salary)),
            EmbedField::inline("Bonus", self.money.format(entry.annual_bonus)),
            EmbedField::inline("Years of experience", entry.years_of_experience.to_string()),
            EmbedField::inline("Stock", self.money.format(entry.annual_stock)),
            EmbedField::inline("Signing bonus", self.money.format(entry.signing_bonus_total)),
            EmbedField::inline("Years at company", entry.years_at_company.to_string()),
        ];

        let embed = Embed {
            title: Some(format!(
                "{} @ {}",
                self.money.format(entry.annual_compensation),
                text_value(&company.name)
            )),
            url: Some(entry.url(&self.site_url)),
            color: Some(self.config.color),
            author: Some(EmbedAuthor {
                name: text_value(&company.name),
                url: Some(company.url(&self.site_url)),
            }),
            fields,
        };

        WebhookMessage {
            username: Some(self.config.username.clone()),
            content: Some(self.config.content.clone()),
            embeds: vec![embed],
        }
    }

    /// Render and deliver one entry; an unsuccessful delivery is an error
    pub async fn notify(&self, entry: &SalaryEntry) -> AppResult<NotificationResult> {
        let message = self.render(entry);
        let result = self.provider.send(&message).await?;
        result.into_delivery(self.provider.name())
    }

    /// Drain the queue until every sender is gone.
    ///
    /// Returns the first delivery error unless `continue_on_error` is set.
    pub async fn run(self, mut queue: mpsc::UnboundedReceiver<SalaryEntry>) -> AppResult<()> {
        tracing::info!(provider = self.provider.name(), "Salary notifier started");

        while let Some(entry) = queue.recv().await {
            match self.notify(&entry).await {
                Ok(result) => {
                    tracing::info!(
                        id = entry.id,
                        company = %entry.company.name,
                        duration_ms = result.duration_ms,
                        "Salary notification sent"
                    );
                }
                Err(e) if self.config.continue_on_error => {
                    tracing::error!(id = entry.id, error = %e, "Salary notification failed");
                }
                Err(e) => {
                    tracing::error!(id = entry.id, error = %e, "Salary notification failed, stopping");
                    return Err(e);
                }
            }
        }

        tracing::info!("Salary notifier stopped");
        Ok(())
    }
}
