//! Abstraction over the remote service that stores books

mod http;

pub use http::HttpBookEndpoint;

use crate::error::TransportError;
use crate::types::{NewBook, SubmissionResult};
use async_trait::async_trait;

/// Result type for endpoint calls
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Accepts a new book and answers with a success/failure envelope
#[async_trait]
pub trait BookEndpoint: Send + Sync {
    /// Send one record; exactly one request per call, no retries
    async fn add_book(&self, book: &NewBook) -> TransportResult<SubmissionResult>;
}
