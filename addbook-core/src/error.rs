//! Error types for AddBook Core

use crate::schema::FieldErrors;
use thiserror::Error;

/// Result type alias for submissions
pub type Result<T> = std::result::Result<T, SubmitError>;

/// Why a submit attempt did not produce a server response
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),

    #[error("A submission is already in flight")]
    AlreadyPending,

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Form was closed before the submission completed")]
    Closed,
}

/// Errors talking to the book endpoint
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Endpoint responded with status {0}")]
    Status(u16),

    #[error("Malformed response envelope: {0}")]
    Envelope(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TransportError::Envelope(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// Errors reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("API URL must start with http:// or https://, got {0:?}")]
    InvalidUrl(String),
}
