//! Balance Handler
//!
//! Sums a user's transactions within one month.

use rust_decimal::Decimal;

use crate::domain::{created_at_prefix, Month, OperationContext};
use crate::error::AppError;
use crate::storage::{DynStorage, QueryOptions};

use super::{MonthlyBalance, MonthlyBalanceQuery};

/// Default number of records fetched per page while aggregating
pub const DEFAULT_BALANCE_PAGE_SIZE: u32 = 100;

/// Handler for monthly balance computation
pub struct BalanceCalculator {
    storage: DynStorage,
    page_size: u32,
}

impl BalanceCalculator {
    pub fn new(storage: DynStorage) -> Self {
        Self {
            storage,
            page_size: DEFAULT_BALANCE_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Execute the balance query.
    ///
    /// The month is checked before any query is issued. Every page of the
    /// month is read in order; a failure on any page fails the whole call.
    pub async fn execute(
        &self,
        query: MonthlyBalanceQuery,
        context: &OperationContext,
    ) -> Result<MonthlyBalance, AppError> {
        let month = Month::parse(query.month.as_deref().unwrap_or_default())?;
        let prefix = created_at_prefix(&month);

        let mut balance = Decimal::ZERO;
        let mut cursor = None;
        let mut pages = 0u32;
        let mut matched = 0usize;

        loop {
            let options = QueryOptions::new()
                .with_limit(self.page_size)
                .with_cursor(cursor.take())
                .with_created_at_prefix(prefix.clone());

            let page = self
                .storage
                .query_by_user_id(&query.user_id, options)
                .await
                .map_err(AppError::balance_failed)?;
            pages += 1;
            matched += page.items.len();

            for item in &page.items {
                balance = balance.checked_add(item.amount).ok_or_else(|| {
                    AppError::balance_overflow(format!("balance overflow for {}", month))
                })?;
            }

            match page.last_evaluated_key {
                Some(key) => cursor = Some(key),
                None => break,
            }
        }

        tracing::debug!(
            user_id = %query.user_id,
            month = %month,
            pages,
            matched,
            balance = %balance,
            correlation_id = ?context.correlation_id,
            "balance calculated"
        );

        Ok(MonthlyBalance {
            user_id: query.user_id,
            month: month.to_string(),
            balance,
        })
    }
}
