//! # Cotacao Hex
//!
//! Application service layer and HTTP adapter for the quote server.
//!
//! ## Architecture
//!
//! - `service/` - Quote service (deadlines and the partial-failure policy)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: QuoteProvider` and `R: QuoteRepository`,
//! allowing different upstreams and stores to be injected.

pub mod inbound;
pub mod service;


pub use service::{QuoteService, Recording, Timeouts};
