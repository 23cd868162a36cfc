//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};
use std::future::Future;
use std::str::FromStr;

use cotacao_types::{Deadline, PersistenceError, Quote, QuoteRepository, StoredQuote};

use crate::types::DbQuote;

const SCHEMA: &str = include_str!("../migrations/0001_create_cotacoes.sql");

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Store
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite quote store.
///
/// Holds only connection options: every call opens its own connection and
/// closes it before returning, so nothing is shared between requests. An
/// in-memory URL therefore gives each call an empty database.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    options: SqliteConnectOptions,
}

impl SqliteStore {
    /// Creates a store for `database_url`, creating the parent directory of an
    /// on-disk database. Does not touch the database itself.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        Ok(Self { options })
    }

    async fn connect(&self) -> Result<SqliteConnection, PersistenceError> {
        SqliteConnection::connect_with(&self.options)
            .await
            .map_err(|e| PersistenceError::Connect(e.to_string()))
    }

    /// Closes `conn`. Whatever the call did has already landed, so a failure
    /// here is only logged.
    async fn close(conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            tracing::debug!("Failed to close SQLite connection: {}", e);
        }
    }
}

/// Runs `fut` until `deadline`, dropping it on expiry.
async fn within<T, F>(deadline: Deadline, fut: F) -> Result<T, PersistenceError>
where
    F: Future<Output = Result<T, PersistenceError>>,
{
    let at = tokio::time::Instant::from_std(deadline.expires_at());
    tokio::time::timeout_at(at, fut)
        .await
        .map_err(|_| PersistenceError::Timeout)?
}

fn exec_error(e: sqlx::Error) -> PersistenceError {
    PersistenceError::Exec(e.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl QuoteRepository for SqliteStore {
    async fn ensure_schema(&self) -> Result<(), PersistenceError> {
        let mut conn = self.connect().await?;

        sqlx::query(SCHEMA)
            .execute(&mut conn)
            .await
            .map_err(exec_error)?;

        Self::close(conn).await;
        Ok(())
    }

    /// The row is written inside a transaction that only commits while
    /// `deadline` still holds. A timed-out call drops the uncommitted
    /// transaction, so `Timeout` always means nothing was stored.
    #[tracing::instrument(skip(self, deadline), fields(bid = %quote.bid()))]
    async fn insert_quote(
        &self,
        quote: &Quote,
        deadline: Deadline,
    ) -> Result<i64, PersistenceError> {
        let bid = quote.bid_value()?;
        if deadline.is_expired() {
            return Err(PersistenceError::Timeout);
        }

        let mut conn = within(deadline, self.connect()).await?;
        let mut tx = within(deadline, async { conn.begin().await.map_err(exec_error) }).await?;

        within(deadline, async {
            sqlx::query(SCHEMA)
                .execute(&mut *tx)
                .await
                .map_err(exec_error)
        })
        .await?;

        let result = within(deadline, async {
            sqlx::query(r#"INSERT INTO cotacoes (bid) VALUES (?)"#)
                .bind(bid)
                .execute(&mut *tx)
                .await
                .map_err(exec_error)
        })
        .await?;

        if deadline.is_expired() {
            return Err(PersistenceError::Timeout);
        }

        // Not bounded: once started, the commit is reported as it lands.
        tx.commit().await.map_err(exec_error)?;

        let id = result.last_insert_rowid();
        Self::close(conn).await;
        Ok(id)
    }

    async fn count_quotes(&self) -> Result<i64, PersistenceError> {
        let mut conn = self.connect().await?;

        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM cotacoes"#)
            .fetch_one(&mut conn)
            .await
            .map_err(exec_error)?;

        Self::close(conn).await;
        Ok(count)
    }

    async fn recent_quotes(&self, limit: i64) -> Result<Vec<StoredQuote>, PersistenceError> {
        let mut conn = self.connect().await?;

        let rows: Vec<DbQuote> = sqlx::query_as(
            r#"SELECT id, bid, strftime('%Y-%m-%d %H:%M:%S', timestamp) AS timestamp
               FROM cotacoes ORDER BY id DESC LIMIT ?"#,
        )
        .bind(limit)
        .fetch_all(&mut conn)
        .await
        .map_err(exec_error)?;

        Self::close(conn).await;
        rows.into_iter().map(DbQuote::into_domain).collect()
    }
}
