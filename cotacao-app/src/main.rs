//! # Cotacao Server
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the SQLite store (creating the table on first start)
//! - Create the upstream provider and the quote service
//! - Start the HTTP server

mod config;
mod telemetry;

use cotacao_hex::{QuoteService, inbound::HttpServer};
use cotacao_repo::build_repo;
use exchange_rates::AwesomeApiProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let _telemetry = telemetry::init()?;

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting quote server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);
    tracing::info!("Using upstream: {}", config.upstream_url);

    // Build store (creates the file and table if absent)
    let store = build_repo(&config.database_url).await?;

    // One HTTP client for all upstream calls
    let http = reqwest::Client::builder().build()?;
    let provider = AwesomeApiProvider::with_client(&config.upstream_url, http);
    tracing::info!("Quoting {} from {}", provider.pair(), provider.endpoint());

    let service = QuoteService::new(provider, store);
    let timeouts = service.timeouts();
    tracing::info!(
        "Timeouts: upstream {:?}, store {:?}",
        timeouts.upstream,
        timeouts.persist
    );

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
