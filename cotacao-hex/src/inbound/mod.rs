//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

mod handlers;
mod server;

pub use handlers::encode_bid;
pub use server::HttpServer;
