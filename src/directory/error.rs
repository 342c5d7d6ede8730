//! Error handling for the directory module

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The response body was not a JSON array of users.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl DirectoryError {
    pub async fn from_response(response: reqwest::Response) -> DirectoryError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        DirectoryError::Http { status, message }
    }

    /// Level at which a failed directory fetch is reported.
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Service not up yet or unreachable
            DirectoryError::Reqwest(_) => LogLevel::Warn,
            DirectoryError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Wrong endpoint or an incompatible payload
            DirectoryError::Http { .. } => LogLevel::Error,
            DirectoryError::Decode(_) => LogLevel::Error,
        }
    }
}
