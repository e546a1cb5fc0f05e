//! In-memory storage
//!
//! A `StorageAdapter` kept in process memory. Used by the test suite and for
//! local runs without a database. Failures can be injected to exercise the
//! error paths of callers.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::Transaction;

use super::adapter::{into_page, Page, QueryOptions, StorageAdapter, StorageError};

#[derive(Debug)]
pub struct InMemoryStorage {
    items: RwLock<Vec<Transaction>>,
    fail_writes: AtomicBool,
    /// Number of queries allowed to succeed before every query fails
    queries_before_failure: AtomicUsize,
    query_count: AtomicUsize,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            fail_writes: AtomicBool::new(false),
            queries_before_failure: AtomicUsize::new(usize::MAX),
            query_count: AtomicUsize::new(0),
        }
    }

    /// Insert records as they are, bypassing the writer
    pub async fn seed(&self, transactions: impl IntoIterator<Item = Transaction>) {
        self.items.write().await.extend(transactions);
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Make every subsequent `put_item` fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Let `count` more queries succeed, then fail the rest
    pub fn fail_queries_after(&self, count: usize) {
        let seen = self.query_count.load(Ordering::SeqCst);
        self.queries_before_failure
            .store(seen.saturating_add(count), Ordering::SeqCst);
    }

    /// Total number of queries issued so far
    pub fn query_count(&self) -> usize {
        self.query_count.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageAdapter for InMemoryStorage {
    async fn put_item(&self, transaction: &Transaction) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("write rejected".to_string()));
        }

        self.items.write().await.push(transaction.clone());
        Ok(())
    }

    async fn query_by_user_id(
        &self,
        user_id: &str,
        options: QueryOptions,
    ) -> Result<Page, StorageError> {
        let issued = self.query_count.fetch_add(1, Ordering::SeqCst);
        if issued >= self.queries_before_failure.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("query rejected".to_string()));
        }

        let items = self.items.read().await;
        let mut matches: Vec<&Transaction> = items
            .iter()
            .filter(|tx| tx.user_id == user_id)
            .filter(|tx| match &options.created_at_prefix {
                Some(prefix) => tx.created_at.starts_with(prefix.as_str()),
                None => true,
            })
            .filter(|tx| match &options.cursor {
                Some(key) => {
                    (tx.created_at.as_str(), tx.id) > (key.created_at.as_str(), key.id)
                }
                None => true,
            })
            .collect();

        matches.sort_by(|a, b| (&a.created_at, a.id).cmp(&(&b.created_at, b.id)));

        let fetch = match options.limit {
            Some(limit) => limit as usize + 1,
            None => matches.len(),
        };
        let rows = matches.into_iter().take(fetch).cloned().collect();

        Ok(into_page(rows, options.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StartKey;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn tx_at(user_id: &str, day: u32) -> Transaction {
        let at = Utc.with_ymd_and_hms(2025, 4, day, 0, 0, 0).unwrap();
        Transaction::new(user_id, dec!(10), format!("day {}", day), at)
    }

    #[test]
    fn test_put_then_query() {
        tokio_test::block_on(async {
            let storage = InMemoryStorage::new();
            let tx = tx_at("123", 1);
            storage.put_item(&tx).await.unwrap();

            let page = storage
                .query_by_user_id("123", QueryOptions::new())
                .await
                .unwrap();
            assert_eq!(page.items, vec![tx]);
            assert!(page.last_evaluated_key.is_none());
        });
    }

    #[tokio::test]
    async fn test_query_is_scoped_to_user_and_sorted() {
        let storage = InMemoryStorage::new();
        storage
            .seed(vec![tx_at("a", 3), tx_at("b", 1), tx_at("a", 1), tx_at("a", 2)])
            .await;

        let page = storage
            .query_by_user_id("a", QueryOptions::new())
            .await
            .unwrap();
        let days: Vec<&str> = page.items.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(days, vec!["day 1", "day 2", "day 3"]);
    }

    #[tokio::test]
    async fn test_cursor_resumes_strictly_after_key() {
        let storage = InMemoryStorage::new();
        storage.seed(vec![tx_at("a", 1), tx_at("a", 2), tx_at("a", 3)]).await;

        let first = storage
            .query_by_user_id("a", QueryOptions::new().with_limit(2))
            .await
            .unwrap();
        assert_eq!(first.items.len(), 2);
        let key = first.last_evaluated_key.clone().unwrap();

        let second = storage
            .query_by_user_id("a", QueryOptions::new().with_limit(2).with_cursor(Some(key)))
            .await
            .unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].description, "day 3");
        assert!(second.last_evaluated_key.is_none());
    }

    #[tokio::test]
    async fn test_prefix_filter() {
        let storage = InMemoryStorage::new();
        let may = Transaction::new(
            "a",
            dec!(5),
            "may",
            Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
        );
        storage.seed(vec![tx_at("a", 1), may]).await;

        let page = storage
            .query_by_user_id("a", QueryOptions::new().with_created_at_prefix("2025-05"))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].description, "may");
    }

    #[tokio::test]
    async fn test_prefix_filter_applies_before_limit() {
        let storage = InMemoryStorage::new();
        let march = (1..=5).map(|day| {
            let at = Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap();
            Transaction::new("a", dec!(1), format!("march {}", day), at)
        });
        storage.seed(march).await;
        storage.seed(vec![tx_at("a", 1), tx_at("a", 2)]).await;

        let options = QueryOptions::new()
            .with_limit(1)
            .with_created_at_prefix("2025-04");
        let first = storage.query_by_user_id("a", options).await.unwrap();
        assert_eq!(first.items.len(), 1);
        assert_eq!(first.items[0].description, "day 1");
        let key = first.last_evaluated_key.unwrap();

        let options = QueryOptions::new()
            .with_limit(1)
            .with_cursor(Some(key))
            .with_created_at_prefix("2025-04");
        let second = storage.query_by_user_id("a", options).await.unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].description, "day 2");
        assert!(second.last_evaluated_key.is_none());
    }

    #[tokio::test]
    async fn test_unknown_cursor_position_still_orders() {
        let storage = InMemoryStorage::new();
        storage.seed(vec![tx_at("a", 1), tx_at("a", 5)]).await;

        let key = StartKey {
            id: uuid::Uuid::nil(),
            user_id: "a".to_string(),
            created_at: "2025-04-03T00:00:00.000Z".to_string(),
        };
        let page = storage
            .query_by_user_id("a", QueryOptions::new().with_cursor(Some(key)))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].description, "day 5");
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let storage = InMemoryStorage::new();
        storage.fail_writes(true);
        assert!(storage.put_item(&tx_at("a", 1)).await.is_err());
        assert!(storage.is_empty().await);

        storage.fail_queries_after(1);
        assert!(storage.query_by_user_id("a", QueryOptions::new()).await.is_ok());
        assert!(storage.query_by_user_id("a", QueryOptions::new()).await.is_err());
        assert_eq!(storage.query_count(), 2);
    }
}
