use thiserror::Error;

/// Application-wide error type.
///
/// The `Source*` variants cover everything that can go wrong while talking to
/// the salary API and are absorbed by the next poll. `Notification` covers a
/// webhook delivery failure and is fatal for the notifier unless it runs in
/// hardened mode.
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport failure reaching the salary API
    #[error("Salary source request failed: {message}")]
    SourceRequest {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    /// Salary API answered with a non-success status
    #[error("Unable to fetch salary entries: status code {status}")]
    SourceStatus { status: u16 },

    /// Salary API body could not be decoded
    #[error("Salary source returned an invalid body: {message}")]
    SourceDecode {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    /// Webhook delivery failed
    #[error("Notification via {provider} failed: {message}")]
    Notification { provider: String, message: String },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Whether the poll loop may swallow this error and try again on the next tick
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::SourceRequest { .. }
                | AppError::SourceStatus { .. }
                | AppError::SourceDecode { .. }
        )
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<crate::config::error::ConfigError> for AppError {
    fn from(error: crate::config::error::ConfigError) -> Self {
        let key = match &error {
            crate::config::error::ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "settings".to_string(),
        };
        AppError::Configuration {
            key,
            source: anyhow::Error::new(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::ConfigError;

    #[test]
    fn test_source_errors_are_recoverable() {
        assert!(AppError::SourceStatus { status: 503 }.is_recoverable());
        assert!(
            AppError::SourceRequest {
                message: "connection refused".into(),
                source: anyhow::anyhow!("connection refused"),
            }
            .is_recoverable()
        );
        assert!(
            AppError::SourceDecode {
                message: "expected value".into(),
                source: anyhow::anyhow!("expected value"),
            }
            .is_recoverable()
        );
    }

    #[test]
    fn test_notification_error_is_fatal() {
        let err = AppError::Notification {
            provider: "discord".into(),
            message: "HTTP 500".into(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Notification via discord failed: HTTP 500");
    }

    #[test]
    fn test_status_error_message() {
        let err = AppError::SourceStatus { status: 404 };
        assert_eq!(
            err.to_string(),
            "Unable to fetch salary entries: status code 404"
        );
    }

    #[test]
    fn test_config_error_keeps_field() {
        let err: AppError = ConfigError::validation("notify_webhook_url", "is required").into();
        match err {
            AppError::Configuration { key, .. } => assert_eq!(key, "notify_webhook_url"),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }
}
