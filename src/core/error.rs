//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for prediction service requests
//! - [`InputError`] - Form input that cannot be turned into a request

use std::fmt;

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Failed to serialize the request body
    EncodeFailed(String),
    /// Network request failed (timeout, CORS, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status) without a usable body
    HttpError(u16),
    /// Error reported by the prediction service
    Api { status: u16, message: String },
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::EncodeFailed(msg) => write!(f, "Failed to encode request: {}", msg),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::Api { status, message } => write!(f, "{} (HTTP {})", message, status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Form input errors raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("expected {expected} values, got {got}")]
    FieldCount { expected: usize, got: usize },

    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field}: '{value}' is not a number")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}
