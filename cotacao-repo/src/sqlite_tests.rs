//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use cotacao_types::{Deadline, PersistenceError, Quote, QuoteRepository};
    use tempfile::TempDir;

    use crate::{SqliteStore, build_repo};

    /// File-backed store in a fresh temp dir. Each call opens its own
    /// connection, so an in-memory database would not persist across calls.
    async fn setup_store() -> (SqliteStore, TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", tmp.path().join("cotacoes.db").display());
        let store = build_repo(&url).await.unwrap();
        (store, tmp)
    }

    fn relaxed() -> Deadline {
        Deadline::after(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_build_repo_creates_empty_table() {
        let (store, _tmp) = setup_store().await;

        assert_eq!(store.count_quotes().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_build_repo_creates_parent_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("nested").join("dir").join("cotacoes.db");
        let url = format!("sqlite://{}", db_path.display());

        build_repo(&url).await.unwrap();

        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let (store, _tmp) = setup_store().await;
        store.insert_quote(&Quote::new("5.43"), relaxed()).await.unwrap();

        store.ensure_schema().await.unwrap();
        store.ensure_schema().await.unwrap();

        assert_eq!(store.count_quotes().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_quote_appends_rows() {
        let (store, _tmp) = setup_store().await;

        let first = store.insert_quote(&Quote::new("5.43"), relaxed()).await.unwrap();
        let second = store.insert_quote(&Quote::new("5.44"), relaxed()).await.unwrap();

        assert!(second > first);
        assert_eq!(store.count_quotes().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_insert_quote_creates_missing_table() {
        let tmp = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", tmp.path().join("fresh.db").display());
        // No build_repo: the table does not exist yet.
        let store = SqliteStore::new(&url).await.unwrap();

        store.insert_quote(&Quote::new("5.43"), relaxed()).await.unwrap();

        assert_eq!(store.count_quotes().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_recent_quotes_newest_first() {
        let (store, _tmp) = setup_store().await;
        store.insert_quote(&Quote::new("5.10"), relaxed()).await.unwrap();
        store.insert_quote(&Quote::new("5.20"), relaxed()).await.unwrap();
        store.insert_quote(&Quote::new("5.30"), relaxed()).await.unwrap();

        let recent = store.recent_quotes(2).await.unwrap();

        assert_eq!(recent.len(), 2);
        assert!((recent[0].bid - 5.30).abs() < 1e-9);
        assert!((recent[1].bid - 5.20).abs() < 1e-9);
        assert!(recent[0].id > recent[1].id);
    }

    #[tokio::test]
    async fn test_recent_quotes_timestamp_is_assigned() {
        let (store, _tmp) = setup_store().await;
        store.insert_quote(&Quote::new("5.43"), relaxed()).await.unwrap();

        let recent = store.recent_quotes(1).await.unwrap();
        let age = chrono::Utc::now().naive_utc() - recent[0].timestamp;

        assert!(age.num_seconds().abs() < 60);
    }

    #[tokio::test]
    async fn test_insert_non_numeric_bid_fails_without_writing() {
        let (store, _tmp) = setup_store().await;

        let result = store.insert_quote(&Quote::new("abc"), relaxed()).await;

        assert!(matches!(result, Err(PersistenceError::InvalidBid(_))));
        assert_eq!(store.count_quotes().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_connect_failure_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database file.
        let url = format!("sqlite://{}", tmp.path().display());
        let store = SqliteStore::new(&url).await.unwrap();

        let result = store.insert_quote(&Quote::new("5.43"), relaxed()).await;

        assert!(matches!(
            result,
            Err(PersistenceError::Connect(_)) | Err(PersistenceError::Exec(_))
        ));
    }

    #[tokio::test]
    async fn test_insert_returns_committed_row_id() {
        let (store, _tmp) = setup_store().await;

        let id = store
            .insert_quote(&Quote::new("5.43"), relaxed())
            .await
            .unwrap();

        let recent = store.recent_quotes(1).await.unwrap();
        assert_eq!(recent[0].id, id);
    }

    #[tokio::test]
    async fn test_insert_with_expired_deadline_writes_nothing() {
        let (store, _tmp) = setup_store().await;
        let expired = Deadline::at(Instant::now() - Duration::from_millis(1));

        let result = store.insert_quote(&Quote::new("5.43"), expired).await;

        assert!(matches!(result, Err(PersistenceError::Timeout)));
        assert_eq!(store.count_quotes().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_timed_out_inserts_never_commit() {
        let (store, _tmp) = setup_store().await;
        let mut committed = 0;
        let mut failed = 0;

        // Budgets from 200 us to ~3 ms straddle the time one insert takes, so
        // some calls expire mid-write.
        for i in 0..200u64 {
            let deadline = Deadline::after(Duration::from_micros(200 + (i % 20) * 150));
            match store.insert_quote(&Quote::new("5.43"), deadline).await {
                Ok(_) => committed += 1,
                Err(_) => failed += 1,
            }
        }

        assert_eq!(committed + failed, 200);
        assert_eq!(store.count_quotes().await.unwrap(), committed);
    }
}
