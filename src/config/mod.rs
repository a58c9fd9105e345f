//! Configuration management for the bot
//!
//! Settings are layered, lowest priority first:
//! 1. `default.toml` (optional)
//! 2. `{environment}.toml` (optional)
//! 3. `local.toml` (optional, not committed)
//! 4. `BOT_*` environment variables
//!
//! The environment alone is a complete configuration: the three settings the
//! bot cannot run without are `BOT_NOTIFY_WEBHOOK_URL`,
//! `BOT_ERROR_WEBHOOK_URL` and `BOT_REFRESH_FREQUENCY`.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{LoggerSettings, NotifierConfig, Settings, SourceConfig};
