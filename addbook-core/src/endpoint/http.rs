//! `reqwest` implementation of the book endpoint

use super::{BookEndpoint, TransportResult};
use crate::config::AddBookConfig;
use crate::error::TransportError;
use crate::types::{NewBook, SubmissionResult};
use async_trait::async_trait;

/// Path the record is posted to, relative to the API URL
pub const BOOK_PATH: &str = "/book";

/// Posts books as JSON to `{api_url}/book`
#[derive(Debug, Clone)]
pub struct HttpBookEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpBookEndpoint {
    /// Create an endpoint for the given API base URL
    pub fn new(api_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Use a preconfigured client (timeouts, proxies, headers)
    pub fn with_client(client: reqwest::Client, api_url: &str) -> Self {
        Self {
            client,
            url: format!("{}{}", api_url.trim_end_matches('/'), BOOK_PATH),
        }
    }

    /// Build from configuration, applying the request timeout if set
    pub fn from_config(config: &AddBookConfig) -> TransportResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_client(client, &config.api_url))
    }

    /// Full URL requests are sent to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl BookEndpoint for HttpBookEndpoint {
    async fn add_book(&self, book: &NewBook) -> TransportResult<SubmissionResult> {
        tracing::debug!(url = %self.url, title = %book.title, "Posting book");

        let response = self.client.post(&self.url).json(book).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| TransportError::Envelope(e.to_string()))
    }
}
