//! # Cotacao Repository
//!
//! Concrete repository implementation (adapter) for the quote service.
//! This crate provides the SQLite adapter that implements the `QuoteRepository` port.

use cotacao_types::QuoteRepository;

pub mod sqlite;
mod types;

#[cfg(test)]
mod sqlite_tests;

pub use sqlite::SqliteStore;

/// Build and initialize the quote store from a database URL.
///
/// This function:
/// 1. Creates the parent directory of an on-disk database
/// 2. Creates the `cotacoes` table if it is missing
/// 3. Returns a ready-to-use `SqliteStore`
///
/// # Examples
///
/// ```ignore
/// let store = build_repo("sqlite://cotacoes.db").await?;
/// ```
pub async fn build_repo(database_url: &str) -> anyhow::Result<SqliteStore> {
    let store = SqliteStore::new(database_url).await?;
    store.ensure_schema().await?;
    tracing::info!("Quote store ready at {}", database_url);
    Ok(store)
}
