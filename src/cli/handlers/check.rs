//! Check command handler
//!
//! Validates configuration and webhook URLs without polling or sending.

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::external::OpenSalaryClient;
use crate::services::notifications::{DiscordWebhookProvider, NotificationProvider};

/// Handler for the check command
pub struct CheckCommandHandler {
    config: Settings,
}

impl CheckCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    pub async fn execute(&self) -> AppResult<()> {
        self.config.validate()?;
        let interval = self.config.refresh_interval()?;
        let client = OpenSalaryClient::new(&self.config.source)?;

        let notify = DiscordWebhookProvider::new(&self.config.notify_webhook_url);
        notify.validate_config().await?;

        println!("✓ Configuration is valid");
        println!("✓ Salary source: {}", client.endpoint());
        println!("✓ Poll interval: {}s", interval.as_secs());
        println!("✓ Notification webhook host: {}", notify.host());

        match self.config.error_webhook() {
            Some(url) => {
                let errors = DiscordWebhookProvider::new(url);
                errors.validate_config().await?;
                println!("✓ Error webhook host: {}", errors.host());
            }
            None => println!("! No error webhook configured, fetch failures are only logged"),
        }

        println!("✓ Logger configuration is valid");
        println!("Check completed successfully - configuration is ready for deployment");
        Ok(())
    }
}
