//! # Cotacao Client SDK
//!
//! A typed Rust client for the quote API.

use std::time::Duration;

use cotacao_types::BidResponse;
use reqwest::Client;

/// Deadline for one quote request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(300);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// True when the request ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_timeout())
    }
}

/// Quote API client.
pub struct CotacaoClient {
    base_url: String,
    timeout: Duration,
    http: Client,
}

impl CotacaoClient {
    /// Creates a new client with the default 300 ms deadline.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: Client::new(),
        }
    }

    /// Sets the per-request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetches the current USD-BRL bid.
    ///
    /// The whole exchange, body included, must finish within the deadline.
    pub async fn get_bid(&self) -> Result<BidResponse, ClientError> {
        let resp = self
            .http
            .get(format!("{}/cotacao", self.base_url))
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body.trim().to_string(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CotacaoClient::new("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.timeout, Duration::from_millis(300));
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = CotacaoClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_client_with_timeout() {
        let client = CotacaoClient::new("http://localhost:8080").with_timeout(Duration::from_secs(1));
        assert_eq!(client.timeout, Duration::from_secs(1));
    }
}
