//! Error handling for non-success API responses.

use std::fmt;

use serde::Deserialize;

use crate::error::BoxOfficeError;

/// A non-2xx response from the ticketing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: reqwest::StatusCode,
    /// The service's `message` field, or the raw body when it has none
    pub message: String,
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

impl ApiError {
    pub fn new(status: reqwest::StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Build an error from a status and the raw response body.
    pub fn from_body(status: reqwest::StatusCode, body: &str) -> Self {
        let message = match serde_json::from_str::<MessageBody>(body) {
            Ok(parsed) => parsed.message,
            Err(_) if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => body.trim().to_string(),
        };
        Self::new(status, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status.as_u16())
    }
}

impl From<ApiError> for BoxOfficeError {
    fn from(error: ApiError) -> Self {
        BoxOfficeError::Api {
            status: error.status,
            message: error.message,
        }
    }
}
