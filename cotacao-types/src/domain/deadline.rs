//! Explicit per-operation deadlines.
//!
//! A `Deadline` is an absolute point in time. Sub-operations derive a child
//! deadline from their parent with [`Deadline::child`]; a child never expires
//! later than the deadline it was derived from.

use std::time::{Duration, Instant};

/// Absolute expiry for a bounded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    /// Creates a root deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self::at(Instant::now() + budget)
    }

    /// Creates a deadline expiring at the given instant.
    pub fn at(expires_at: Instant) -> Self {
        Self { expires_at }
    }

    /// Derives a child deadline bounded by both `budget` and this deadline.
    pub fn child(&self, budget: Duration) -> Self {
        let wanted = Instant::now() + budget;
        Self {
            expires_at: wanted.min(self.expires_at),
        }
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
