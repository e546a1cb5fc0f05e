//! Storage Adapter
//!
//! The capability every handler receives to reach the transaction store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{StartKey, Transaction};

/// Shared handle passed to handlers
pub type DynStorage = Arc<dyn StorageAdapter>;

/// Errors raised by a storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Store not reachable or refusing requests
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Options for a query against the user index
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Maximum number of items in the page. `None` returns every match.
    pub limit: Option<u32>,
    /// Resume strictly after this key
    pub cursor: Option<StartKey>,
    /// Only items whose `createdAt` starts with this text
    pub created_at_prefix: Option<String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cursor(mut self, cursor: Option<StartKey>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn with_created_at_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.created_at_prefix = Some(prefix.into());
        self
    }
}

/// One page of query results
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub items: Vec<Transaction>,
    /// Key of the last item in `items`, present only when more matches follow
    pub last_evaluated_key: Option<StartKey>,
}

/// Key-value store with a secondary index on `userId`.
///
/// Items under one user are returned in `(createdAt, id)` ascending order.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Persist a new record. Every call writes a new item.
    async fn put_item(&self, transaction: &Transaction) -> Result<(), StorageError>;

    /// Query the user index
    async fn query_by_user_id(
        &self,
        user_id: &str,
        options: QueryOptions,
    ) -> Result<Page, StorageError>;
}

/// Split an over-fetched, ordered result into a page.
///
/// Backends fetch `limit + 1` rows; the extra row only signals that more
/// matches exist and is dropped here.
pub(crate) fn into_page(mut rows: Vec<Transaction>, limit: Option<u32>) -> Page {
    let limit = match limit {
        Some(limit) => limit as usize,
        None => {
            return Page {
                items: rows,
                last_evaluated_key: None,
            }
        }
    };

    if rows.len() <= limit {
        return Page {
            items: rows,
            last_evaluated_key: None,
        };
    }

    rows.truncate(limit);
    let last_evaluated_key = rows.last().map(Transaction::start_key);
    Page {
        items: rows,
        last_evaluated_key,
    }
}
