use crate::api::error::ApiError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Severity of a failed panel fetch, as shown in the activity log.
    pub fn classify_fetch_error(&self, error: &ApiError) -> LogLevel {
        if let ApiError::Decode(_) = error {
            return LogLevel::Error;
        }
        match error.status() {
            // Non-critical: Temporary server issues
            Some(429) => LogLevel::Debug,
            Some(500..=599) => LogLevel::Warn,

            // Critical: Auth, wrong endpoint
            Some(401 | 403 | 404) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
