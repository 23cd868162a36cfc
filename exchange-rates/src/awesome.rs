//! AwesomeAPI upstream adapter.
//!
//! `GET {base}/json/last/USD-BRL` answers with an object keyed by the pair
//! (`{"USDBRL": {"bid": "5.43", ...}}`).

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use cotacao_types::{Deadline, ProtocolError, Quote, QuoteProvider, UpstreamError};

use crate::CurrencyPair;

/// One pair entry of the upstream response.
///
/// Only `bid` is required; the rest is informational.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamQuote {
    pub bid: String,
    #[serde(default)]
    pub ask: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub codein: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub create_date: Option<String>,
}

/// Decodes an upstream body and extracts the quote for `pair`.
///
/// A body without the pair key is `MissingPair`, never a zero value.
pub fn parse_last_quote(body: &[u8], pair: &CurrencyPair) -> Result<UpstreamQuote, ProtocolError> {
    let mut entries: HashMap<String, serde_json::Value> =
        serde_json::from_slice(body).map_err(|e| ProtocolError::MalformedBody(e.to_string()))?;

    let key = pair.response_key();
    let entry = entries
        .remove(&key)
        .ok_or(ProtocolError::MissingPair(key))?;

    serde_json::from_value(entry).map_err(|e| ProtocolError::MalformedBody(e.to_string()))
}

/// Quote provider backed by economia.awesomeapi.com.br.
pub struct AwesomeApiProvider {
    base_url: String,
    pair: CurrencyPair,
    http: Client,
}

impl AwesomeApiProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://economia.awesomeapi.com.br";

    /// Creates a USD-BRL provider against `base_url` with its own HTTP client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Creates a provider using a caller-supplied HTTP client.
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            pair: CurrencyPair::usd_brl(),
            http,
        }
    }

    pub fn pair(&self) -> CurrencyPair {
        self.pair
    }

    /// Full URL of the last-quote endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/json/last/{}", self.base_url, self.pair.path_segment())
    }
}

fn classify(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Transport(err.to_string())
    }
}

#[async_trait]
impl QuoteProvider for AwesomeApiProvider {
    #[tracing::instrument(skip(self), fields(pair = %self.pair))]
    async fn fetch_quote(&self, deadline: Deadline) -> Result<Quote, UpstreamError> {
        if deadline.is_expired() {
            return Err(UpstreamError::Timeout);
        }

        let resp = self
            .http
            .get(self.endpoint())
            .timeout(deadline.remaining())
            .send()
            .await
            .map_err(classify)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProtocolError::UnexpectedStatus(status.as_u16()).into());
        }

        let body = resp.bytes().await.map_err(classify)?;
        let upstream = parse_last_quote(&body, &self.pair)?;

        tracing::debug!(
            bid = %upstream.bid,
            ask = ?upstream.ask,
            created = ?upstream.create_date,
            "Upstream quote received"
        );

        Ok(Quote::new(upstream.bid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "USDBRL": {
            "code": "USD",
            "codein": "BRL",
            "name": "Dólar Americano/Real Brasileiro",
            "high": "5.4712",
            "low": "5.4108",
            "varBid": "0.0101",
            "pctChange": "0.19",
            "bid": "5.4310",
            "ask": "5.4320",
            "timestamp": "1718900000",
            "create_date": "2024-06-20 13:33:20"
        }
    }"#;

    #[test]
    fn test_parse_last_quote() {
        let quote = parse_last_quote(SAMPLE.as_bytes(), &CurrencyPair::usd_brl()).unwrap();
        assert_eq!(quote.bid, "5.4310");
        assert_eq!(quote.ask.as_deref(), Some("5.4320"));
        assert_eq!(quote.codein.as_deref(), Some("BRL"));
    }

    #[test]
    fn test_parse_missing_pair_is_distinct() {
        let result = parse_last_quote(br#"{"EURBRL": {"bid": "6.0"}}"#, &CurrencyPair::usd_brl());
        assert!(matches!(result, Err(ProtocolError::MissingPair(k)) if k == "USDBRL"));
    }

    #[test]
    fn test_parse_entry_without_bid_is_malformed() {
        let result = parse_last_quote(br#"{"USDBRL": {"ask": "5.0"}}"#, &CurrencyPair::usd_brl());
        assert!(matches!(result, Err(ProtocolError::MalformedBody(_))));
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        let result = parse_last_quote(b"<html>oops</html>", &CurrencyPair::usd_brl());
        assert!(matches!(result, Err(ProtocolError::MalformedBody(_))));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider = AwesomeApiProvider::new("http://localhost:9000/");
        assert_eq!(
            provider.endpoint(),
            "http://localhost:9000/json/last/USD-BRL"
        );
    }

    #[test]
    fn test_provider_quotes_usd_brl() {
        let provider = AwesomeApiProvider::new(AwesomeApiProvider::DEFAULT_BASE_URL);
        assert_eq!(provider.pair(), CurrencyPair::usd_brl());
        assert_eq!(provider.pair().to_string(), "USD-BRL");
    }
}
