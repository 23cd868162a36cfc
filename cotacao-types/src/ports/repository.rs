//! Repository port trait.
//!
//! Adapters (SQLite, in-memory mocks) implement this trait.

use crate::domain::{Deadline, Quote, StoredQuote};
use crate::error::PersistenceError;

/// Append-only store of quotes.
#[async_trait::async_trait]
pub trait QuoteRepository: Send + Sync + 'static {
    /// Creates the quote table if it does not exist. Idempotent.
    async fn ensure_schema(&self) -> Result<(), PersistenceError>;

    /// Appends one quote and returns its row id.
    ///
    /// Returns `PersistenceError::Timeout` once `deadline` passes, and a call
    /// that returns `Timeout` must not have stored the quote.
    async fn insert_quote(&self, quote: &Quote, deadline: Deadline)
    -> Result<i64, PersistenceError>;

    /// Counts stored quotes.
    async fn count_quotes(&self) -> Result<i64, PersistenceError>;

    /// Lists the most recent quotes, newest first.
    async fn recent_quotes(&self, limit: i64) -> Result<Vec<StoredQuote>, PersistenceError>;
}
