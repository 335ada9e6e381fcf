//! # CoinGate Error Types
//!
//! Typed error handling for the CoinGate client.
//! All client operations return `Result<T, CoinGateError>`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core error type for all CoinGate operations
#[derive(Debug, Error)]
pub enum CoinGateError {
    /// Configuration errors (missing app id or token, invalid env vars)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network/HTTP error communicating with CoinGate
    #[error("Network error: {0}")]
    Network(String),

    /// Non-200 response from the CoinGate API
    #[error("API error {status}: {reason} {message}")]
    Api {
        status: u16,
        reason: String,
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Inbound callback body is not a valid form
    #[error("Callback parse error: {0}")]
    CallbackParse(String),
}

impl CoinGateError {
    /// Returns true if a caller could reasonably retry the call.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            CoinGateError::Network(_) => true,
            CoinGateError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Upstream HTTP status, for API errors
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CoinGateError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body CoinGate returns alongside a non-200 status
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    pub status: i64,
    pub message: String,
    pub reason: String,
}

impl ErrorResponse {
    /// Decode an error body, falling back to empty fields when the body
    /// is not the expected JSON shape.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Build the error surfaced to the caller for an HTTP status and body
    pub fn into_error(self, http_status: u16) -> CoinGateError {
        CoinGateError::Api {
            status: http_status,
            reason: self.reason,
            message: self.message,
        }
    }
}

/// Result type alias for CoinGate operations
pub type CoinGateResult<T> = Result<T, CoinGateError>;
