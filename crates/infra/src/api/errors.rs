//! API-specific error types
//!
//! Classifies failures of the REST adapters before they are folded into
//! [`AspireError`].

use aspire_domain::AspireError;
use reqwest::StatusCode;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 401/403
    Authentication,
    /// 404 or an empty envelope
    NotFound,
    /// Other 4xx
    Client,
    /// 5xx
    Server,
    /// Connection, timeout and transport failures
    Network,
    /// Response body did not match the expected shape
    Decode,
    /// Request could not be built
    Config,
}

/// REST operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::NotFound(_) => ApiErrorCategory::NotFound,
            Self::Client(_) => ApiErrorCategory::Client,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Network(_) => ApiErrorCategory::Network,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Classify a non-success HTTP status.
    pub fn from_status(status: StatusCode, url: &str, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("{url} returned status {status}")
        } else {
            format!("{url} returned status {status}: {body}")
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Self::Auth(message)
        } else if status == StatusCode::NOT_FOUND {
            Self::NotFound(message)
        } else if status.is_server_error() {
            Self::Server(message)
        } else if status.is_client_error() {
            Self::Client(message)
        } else {
            Self::Network(message)
        }
    }
}

impl From<AspireError> for ApiError {
    fn from(err: AspireError) -> Self {
        match err {
            AspireError::Network(message) => Self::Network(message),
            AspireError::Auth(message) => Self::Auth(message),
            AspireError::NotFound(message) => Self::NotFound(message),
            AspireError::InvalidInput(message) => Self::Client(message),
            AspireError::Server(message) => Self::Server(message),
            AspireError::Parse(message) => Self::Decode(message),
            AspireError::Config(message) => Self::Config(message),
            AspireError::Hashing(message)
            | AspireError::Storage(message)
            | AspireError::Internal(message) => Self::Network(message),
        }
    }
}

impl From<ApiError> for AspireError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth(message) => Self::Auth(message),
            ApiError::NotFound(message) => Self::NotFound(message),
            ApiError::Client(message) => Self::InvalidInput(message),
            ApiError::Server(message) => Self::Server(message),
            ApiError::Network(message) => Self::Network(message),
            ApiError::Decode(message) => Self::Parse(message),
            ApiError::Config(message) => Self::Config(message),
        }
    }
}
