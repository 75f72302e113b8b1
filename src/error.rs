//! Error Types
//!
//! Failures from the content API and from local rental-draft validation.

use thiserror::Error;

/// Result type for content API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Content API errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS, ...)
    #[error("Network error: {0}")]
    Network(String),
    /// Server answered with a non-success status
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// Response body did not match the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status { status: status.as_u16(), message: err.to_string() }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Rental draft validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please choose a rental start time")]
    MissingTime,
    #[error("Invalid rental start time: {0}")]
    InvalidTime(String),
    #[error("Rental must last at least one day")]
    InvalidDays,
}
