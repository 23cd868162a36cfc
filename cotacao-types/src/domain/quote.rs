//! Quote domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;

/// A USD/BRL quote as received from the upstream provider.
///
/// The bid is kept as the exact text the provider sent so it can be echoed
/// back without rounding or reformatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    bid: String,
}

impl Quote {
    pub fn new(bid: impl Into<String>) -> Self {
        Self { bid: bid.into() }
    }

    /// Returns the bid exactly as quoted.
    pub fn bid(&self) -> &str {
        &self.bid
    }

    /// Parses the bid into the numeric form used by the store.
    pub fn bid_value(&self) -> Result<f64, PersistenceError> {
        self.bid
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| PersistenceError::InvalidBid(self.bid.clone()))
    }
}

/// A persisted quote row. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredQuote {
    /// Auto-assigned row identifier
    pub id: i64,
    /// Numeric bid
    pub bid: f64,
    /// Creation time assigned by the store (UTC)
    pub timestamp: NaiveDateTime,
}
