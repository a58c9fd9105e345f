//! Shared helpers for the integration harnesses.

#![allow(dead_code)]

pub mod fake_discord;
pub mod fake_opensalary;

use std::time::Duration;

use opensalary_bot::config::Settings;

/// Poll `condition` every 20ms until it holds, panicking after `timeout`
pub async fn eventually(timeout: Duration, condition: impl Fn() -> bool) {
    let deadline = tokio::time::Instant::now() + timeout;
    while !condition() {
        if tokio::time::Instant::now() > deadline {
            panic!("condition not met within {:?}", timeout);
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

/// Settings pointing at the fakes, polling every 100ms
pub fn settings(api_url: &str, notify_url: &str, error_url: Option<&str>) -> Settings {
    let mut settings = Settings {
        notify_webhook_url: notify_url.to_string(),
        error_webhook_url: error_url.unwrap_or_default().to_string(),
        refresh_frequency: "100ms".to_string(),
        ..Default::default()
    };
    settings.source.api_url = api_url.to_string();
    settings
}

pub fn entry_json(id: i64, company: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "role_title": "Software Engineer",
        "role_focus": "Backend",
        "grade": "L5",
        "annual_compensation": 12_500_000,
        "annual_salary": 9_000_000,
        "annual_bonus": 1_500_000,
        "annual_stock": 2_000_000,
        "signing_bonus_total": 500_000,
        "years_of_experience": 8,
        "years_at_company": 2,
        "company": {"name_en": company, "slug": company.to_lowercase()}
    })
}
