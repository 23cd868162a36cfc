//! Error types for the quote service.

/// Upstream response did not match the expected contract.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("Unexpected upstream status: {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed upstream body: {0}")]
    MalformedBody(String),

    #[error("Pair {0} not found in upstream response")]
    MissingPair(String),
}

/// Failures fetching a quote from the upstream provider.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream deadline exceeded")]
    Timeout,

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// Store failures. Logged by the service, never surfaced to HTTP callers.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Store connection failed: {0}")]
    Connect(String),

    #[error("Store statement failed: {0}")]
    Exec(String),

    #[error("Store deadline exceeded")]
    Timeout,

    #[error("Bid is not numeric: {0:?}")]
    InvalidBid(String),
}

/// Application-level errors (for HTTP responses).
///
/// Every variant maps to `500 Internal Server Error`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Response encoding failed: {0}")]
    Encoding(String),
}
