//! OpenSalary Bot Library
//!
//! Polls the OpenSalary salary-entries API and forwards newly published
//! entries to a Discord webhook.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod watcher;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
