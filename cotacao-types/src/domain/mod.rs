//! Domain models for the quote service.

pub mod deadline;
pub mod quote;

pub use deadline::Deadline;
pub use quote::{Quote, StoredQuote};
