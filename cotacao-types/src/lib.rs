//! # Cotacao Types
//!
//! Domain types and port traits for the USD/BRL quote service.
//! This crate has ZERO external IO dependencies - only data structures,
//! deadline arithmetic, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Quote, StoredQuote, Deadline)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Upstream, persistence and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Deadline, Quote, StoredQuote};
pub use dto::BidResponse;
pub use error::{AppError, PersistenceError, ProtocolError, UpstreamError};
pub use ports::{QuoteProvider, QuoteRepository};
