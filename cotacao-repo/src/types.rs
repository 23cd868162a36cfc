//! Database row types.

use chrono::NaiveDateTime;
use sqlx::FromRow;

use cotacao_types::{PersistenceError, StoredQuote};

/// Format SQLite uses for `CURRENT_TIMESTAMP`.
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Quote row from database.
#[derive(FromRow)]
pub struct DbQuote {
    pub id: i64,
    pub bid: f64,
    pub timestamp: String,
}

impl DbQuote {
    pub fn into_domain(self) -> Result<StoredQuote, PersistenceError> {
        let timestamp = NaiveDateTime::parse_from_str(&self.timestamp, SQLITE_TIMESTAMP_FORMAT)
            .map_err(|e| {
                PersistenceError::Exec(format!("Invalid timestamp {:?}: {}", self.timestamp, e))
            })?;

        Ok(StoredQuote {
            id: self.id,
            bid: self.bid,
            timestamp,
        })
    }
}
