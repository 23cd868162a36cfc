//! Data Transfer Objects (DTOs) for the HTTP boundary.

use serde::{Deserialize, Serialize};

use crate::domain::Quote;

/// Body of a successful `GET /cotacao` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidResponse {
    /// Bid exactly as quoted upstream, e.g. `"5.43"`
    pub bid: String,
}

impl From<&Quote> for BidResponse {
    fn from(quote: &Quote) -> Self {
        Self {
            bid: quote.bid().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_response_wire_format() {
        let body = serde_json::to_string(&BidResponse::from(&Quote::new("5.43"))).unwrap();
        assert_eq!(body, r#"{"bid":"5.43"}"#);
    }
}
