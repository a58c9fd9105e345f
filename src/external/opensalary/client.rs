use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use super::provider::SalarySource;
use crate::config::SourceConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use crate::models::{SalaryEntriesPage, SalaryEntry};

const ENTRIES_PATH: &str = "/api/salary-entries";

/// Only the newest page is ever polled
const PAGE: &str = "1";

/// HTTP client for `GET /api/salary-entries`
#[derive(Debug, Clone)]
pub struct OpenSalaryClient {
    endpoint: Url,
}

impl OpenSalaryClient {
    /// Build the client, pre-computing the filtered page-1 URL
    pub fn new(config: &SourceConfig) -> AppResult<Self> {
        let base = config.api_url.trim_end_matches('/');
        let endpoint = Url::parse_with_params(
            &format!("{}{}", base, ENTRIES_PATH),
            &[
                ("page", PAGE),
                ("job_role", config.job_role.as_str()),
                ("locale", config.locale.as_str()),
            ],
        )
        .map_err(|e| AppError::Validation {
            field: "source.api_url".to_string(),
            reason: format!("Invalid API URL '{}': {}", config.api_url, e),
        })?;

        Ok(Self { endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_error(message: &str, source: reqwest::Error) -> AppError {
        AppError::SourceRequest {
            message: format!("{}: {}", message, source),
            source: source.into(),
        }
    }
}

#[async_trait]
impl SalarySource for OpenSalaryClient {
    fn name(&self) -> &'static str {
        "opensalary"
    }

    async fn fetch_entries(&self) -> AppResult<Vec<SalaryEntry>> {
        let resp = HTTP_CLIENT
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| Self::request_error("GET salary-entries failed", e))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(AppError::SourceStatus {
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| Self::request_error("reading salary-entries body failed", e))?;

        let page: SalaryEntriesPage =
            serde_json::from_slice(&body).map_err(|e| AppError::SourceDecode {
                message: e.to_string(),
                source: e.into(),
            })?;

        tracing::debug!(
            source = self.name(),
            count = page.items.len(),
            "Fetched salary entries"
        );

        Ok(page.items)
    }
}
