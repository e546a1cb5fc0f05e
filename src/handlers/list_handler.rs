//! List Handler
//!
//! Pages through a user's transactions.

use crate::domain::{Cursor, DomainError, OperationContext};
use crate::error::AppError;
use crate::storage::{DynStorage, QueryOptions};

use super::{ListTransactionsQuery, TransactionPage};

/// Handler for listing a user's transactions
pub struct TransactionLister {
    storage: DynStorage,
}

impl TransactionLister {
    pub fn new(storage: DynStorage) -> Self {
        Self { storage }
    }

    /// Fetch one page, resuming after the cursor when one is given
    pub async fn execute(
        &self,
        query: ListTransactionsQuery,
        context: &OperationContext,
    ) -> Result<TransactionPage, AppError> {
        let cursor = query.cursor.as_deref().map(Cursor::decode).transpose()?;

        // A cursor only makes sense for the user it was issued for
        if let Some(key) = &cursor {
            if key.user_id != query.user_id {
                return Err(DomainError::InvalidCursor.into());
            }
        }

        let options = QueryOptions::new()
            .with_limit(query.limit)
            .with_cursor(cursor);

        let page = self
            .storage
            .query_by_user_id(&query.user_id, options)
            .await
            .map_err(AppError::list_failed)?;

        tracing::debug!(
            user_id = %query.user_id,
            count = page.items.len(),
            has_more = page.last_evaluated_key.is_some(),
            correlation_id = ?context.correlation_id,
            "listed transactions"
        );

        Ok(TransactionPage {
            items: page.items,
            next_cursor: page.last_evaluated_key.as_ref().map(Cursor::encode),
        })
    }
}

/// Resolve the `limit` query parameter into a page size.
///
/// Absent means `default`; anything but a positive integer is rejected;
/// values above `max` are clamped.
pub fn resolve_limit(raw: Option<&str>, default: u32, max: u32) -> Result<u32, DomainError> {
    let limit = match raw {
        None => default,
        Some(text) => text
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::InvalidLimit)?,
    };

    if limit == 0 {
        return Err(DomainError::InvalidLimit);
    }

    Ok(limit.min(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_limit_default() {
        assert_eq!(resolve_limit(None, 10, 1000), Ok(10));
    }

    #[test]
    fn test_resolve_limit_parses_and_clamps() {
        assert_eq!(resolve_limit(Some("1"), 10, 1000), Ok(1));
        assert_eq!(resolve_limit(Some("5000"), 10, 1000), Ok(1000));
    }

    #[test]
    fn test_resolve_limit_rejects_garbage() {
        assert_eq!(resolve_limit(Some("0"), 10, 1000), Err(DomainError::InvalidLimit));
        assert_eq!(resolve_limit(Some("-1"), 10, 1000), Err(DomainError::InvalidLimit));
        assert_eq!(resolve_limit(Some("ten"), 10, 1000), Err(DomainError::InvalidLimit));
        assert_eq!(resolve_limit(Some(""), 10, 1000), Err(DomainError::InvalidLimit));
    }
}
