//! Quote Application Service
//!
//! Orchestrates one request: a bounded upstream fetch, then a best-effort
//! store write bounded by a deadline derived from the fetch deadline.
//! Contains NO transport logic - the HTTP adapter only encodes the result.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::error::Elapsed;
use tracing::Instrument;

use cotacao_types::{
    AppError, Deadline, PersistenceError, Quote, QuoteProvider, QuoteRepository, UpstreamError,
};

/// Budget for the upstream fetch.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_millis(200);

/// Budget for the store write, derived from the upstream deadline.
pub const PERSIST_TIMEOUT: Duration = Duration::from_millis(10);

/// Per-request time budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub upstream: Duration,
    pub persist: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            upstream: UPSTREAM_TIMEOUT,
            persist: PERSIST_TIMEOUT,
        }
    }
}

/// Runs `fut` until `deadline`, cancelling it on expiry.
async fn within<F: Future>(deadline: Deadline, fut: F) -> Result<F::Output, Elapsed> {
    let at = tokio::time::Instant::from_std(deadline.expires_at());
    tokio::time::timeout_at(at, fut).await
}

/// Handle to a detached store write.
///
/// Dropping it leaves the write running; awaiting [`Recording::outcome`]
/// waits for it to finish or time out.
#[derive(Debug)]
pub struct Recording(JoinHandle<Result<i64, PersistenceError>>);

impl Recording {
    /// Waits for the write and returns the new row id.
    pub async fn outcome(self) -> Result<i64, PersistenceError> {
        match self.0.await {
            Ok(result) => result,
            Err(e) => Err(PersistenceError::Exec(format!("Store task failed: {}", e))),
        }
    }
}

/// Application service for quote requests.
pub struct QuoteService<P: QuoteProvider, R: QuoteRepository> {
    provider: P,
    repo: Arc<R>,
    timeouts: Timeouts,
}

impl<P: QuoteProvider, R: QuoteRepository> QuoteService<P, R> {
    /// Creates a new quote service with the default 200 ms / 10 ms budgets.
    pub fn new(provider: P, repo: R) -> Self {
        Self {
            provider,
            repo: Arc::new(repo),
            timeouts: Timeouts::default(),
        }
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    /// Fetches a quote and starts recording it.
    ///
    /// On upstream failure nothing is written. On success the same quote is
    /// returned and handed to a detached write whose deadline is a child of
    /// the fetch deadline.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_and_record(&self) -> Result<(Quote, Recording), UpstreamError> {
        let deadline = Deadline::after(self.timeouts.upstream);

        let fetched = match within(deadline, self.provider.fetch_quote(deadline)).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout),
        };
        let quote = fetched.inspect_err(|e| tracing::error!("Failed to fetch quote: {}", e))?;

        let recording = self.record(quote.clone(), deadline.child(self.timeouts.persist));
        Ok((quote, recording))
    }

    /// Fetches a quote, leaving the store write to finish on its own.
    pub async fn current_quote(&self) -> Result<Quote, AppError> {
        let (quote, _detached) = self.fetch_and_record().await?;
        Ok(quote)
    }

    fn record(&self, quote: Quote, deadline: Deadline) -> Recording {
        let repo = Arc::clone(&self.repo);

        let task = async move {
            // The store enforces the deadline itself so that a timed-out
            // write is rolled back rather than abandoned mid-flight.
            let outcome = repo.insert_quote(&quote, deadline).await;

            match &outcome {
                Ok(id) => tracing::debug!(id, bid = %quote.bid(), "Quote persisted"),
                Err(e) => tracing::warn!(bid = %quote.bid(), "Failed to persist quote: {}", e),
            }
            outcome
        };

        Recording(tokio::spawn(task.in_current_span()))
    }
}
