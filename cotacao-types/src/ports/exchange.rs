//! Exchange rate provider port.
//!
//! This trait defines the interface for upstream quote sources.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::domain::{Deadline, Quote};
use crate::error::UpstreamError;

/// Port trait for upstream quote providers.
#[async_trait::async_trait]
pub trait QuoteProvider: Send + Sync + 'static {
    /// Fetches the latest quote.
    ///
    /// The call must not outlive `deadline`; once it expires the result is
    /// `UpstreamError::Timeout`.
    async fn fetch_quote(&self, deadline: Deadline) -> Result<Quote, UpstreamError>;
}
