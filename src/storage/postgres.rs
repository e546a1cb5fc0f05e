//! PostgreSQL storage
//!
//! Stores transactions in a single table with a `(user_id, created_at, id)`
//! index standing in for the user secondary index. `created_at` is kept as
//! the ISO-8601 text so month filtering stays a literal prefix match.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::Transaction;

use super::adapter::{into_page, Page, QueryOptions, StorageAdapter, StorageError};

type TransactionRow = (Uuid, String, Decimal, String, String);

/// PostgreSQL-backed storage adapter
#[derive(Debug, Clone)]
pub struct PgStorage {
    pool: PgPool,
    insert_sql: String,
    query_sql: String,
}

impl PgStorage {
    /// Create a new PgStorage over `table`.
    ///
    /// `table` must already be a validated SQL identifier; it is spliced into
    /// the statements as is.
    pub fn new(pool: PgPool, table: &str) -> Self {
        let insert_sql = format!(
            "INSERT INTO {} (id, user_id, amount, description, created_at) VALUES ($1, $2, $3, $4, $5)",
            table
        );
        let query_sql = format!(
            r#"
            SELECT id, user_id, amount, description, created_at
            FROM {}
            WHERE user_id = $1
              AND ($2::text IS NULL OR (created_at, id) > ($2::text COLLATE "C", $3::uuid))
              AND ($4::text IS NULL OR created_at LIKE $4::text ESCAPE '\')
            ORDER BY created_at, id
            LIMIT $5
            "#,
            table
        );

        Self {
            pool,
            insert_sql,
            query_sql,
        }
    }
}

#[async_trait]
impl StorageAdapter for PgStorage {
    async fn put_item(&self, transaction: &Transaction) -> Result<(), StorageError> {
        sqlx::query(&self.insert_sql)
            .bind(transaction.id)
            .bind(&transaction.user_id)
            .bind(transaction.amount)
            .bind(&transaction.description)
            .bind(&transaction.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn query_by_user_id(
        &self,
        user_id: &str,
        options: QueryOptions,
    ) -> Result<Page, StorageError> {
        let (after_created_at, after_id) = match &options.cursor {
            Some(key) => (Some(key.created_at.clone()), Some(key.id)),
            None => (None, None),
        };
        let like_pattern = options
            .created_at_prefix
            .as_deref()
            .map(|prefix| format!("{}%", escape_like(prefix)));
        // LIMIT NULL behaves as LIMIT ALL
        let fetch = options.limit.map(|limit| i64::from(limit) + 1);

        let rows: Vec<TransactionRow> = sqlx::query_as(&self.query_sql)
            .bind(user_id)
            .bind(after_created_at)
            .bind(after_id)
            .bind(like_pattern)
            .bind(fetch)
            .fetch_all(&self.pool)
            .await?;

        let items = rows
            .into_iter()
            .map(|(id, user_id, amount, description, created_at)| Transaction {
                id,
                user_id,
                amount,
                description,
                created_at,
            })
            .collect();

        Ok(into_page(items, options.limit))
    }
}

/// Escape `LIKE` metacharacters so the prefix matches literally
fn escape_like(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("2025-04"), "2025-04");
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }
}
