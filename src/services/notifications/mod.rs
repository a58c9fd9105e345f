//! Notification delivery with pluggable providers.
//!
//! `NotificationProvider` abstracts the sink so the watcher can be tested
//! against an in-memory provider; `DiscordWebhookProvider` is the production
//! implementation.

mod discord_provider;
mod provider;

pub use discord_provider::DiscordWebhookProvider;
pub use provider::{NotificationProvider, NotificationResult};
