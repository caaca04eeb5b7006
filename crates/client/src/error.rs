//! Client error types.

use thiserror::Error;
use tinyblog_core::{blog::ValidationError, params::ParamError};

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Upstream returned {status} for {url}: {message}")]
    Upstream {
        status: u16,
        url: String,
        message: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ParamError> for ClientError {
    fn from(err: ParamError) -> Self {
        ClientError::InvalidArgument(err.to_string())
    }
}

/// Maps a [`ClientError`] to the HTTP status a page host should answer with.
///
/// - `InvalidArgument` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Upstream`, `Request`, `Validation`, `Json` -> 502 (Bad Gateway)
/// - `Configuration` -> 500 (Internal Server Error)
pub fn client_error_to_status_code(error: &ClientError) -> u16 {
    match error {
        ClientError::InvalidArgument(_) => 400,
        ClientError::NotFound { .. } => 404,
        ClientError::Upstream { .. } => 502,
        ClientError::Request(_) => 502,
        ClientError::Validation(_) => 502,
        ClientError::Json(_) => 502,
        ClientError::Configuration(_) => 500,
    }
}
