use thiserror::Error;

// Import Axum types for HTTP response conversion
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Body returned for payloads that fail schema validation
pub const MALFORMED_REQUEST_MESSAGE: &str = "Invalid request payload.";

/// Body returned when the completion provider fails
pub const PROVIDER_FAILURE_MESSAGE: &str = "Failed to generate a response.";

/// Body returned when the provider credential is missing
pub const MISSING_API_KEY_MESSAGE: &str = "Missing OPENAI_API_KEY environment variable.";

/// The custom error type for the application.
#[derive(Debug, Error)]
pub enum Error {
    /// The process lacks a required setting (the provider credential).
    #[error("Misconfigured: {0}")]
    Misconfigured(String),

    /// The inbound payload failed schema validation.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The completion provider failed or returned unusable data.
    #[error("Provider error: {0}")]
    Provider(String),

    /// A not found error (resource does not exist).
    #[error("Not found: {0}")]
    NotFound(String),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A type alias for `Result<T, Error>` to simplify function signatures.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Misconfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Error::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body shown to the caller.
    ///
    /// Validation details and provider error text stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Error::Misconfigured(msg) => msg.clone(),
            Error::MalformedRequest(_) => MALFORMED_REQUEST_MESSAGE.to_string(),
            Error::Provider(_) => PROVIDER_FAILURE_MESSAGE.to_string(),
            Error::NotFound(msg) => msg.clone(),
            Error::Config(_) => "Configuration error".to_string(),
            Error::Internal(_) => "Internal server error".to_string(),
        }
    }
}

/// Convert custom Error to HTTP response
///
/// Each variant maps to a status code and a fixed plain-text body.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status_code(), self.public_message()).into_response()
    }
}
