//! Command and query definitions
//!
//! Commands represent intentions to change the system state; queries read it.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::Transaction;

// =========================================================================
// CreateTransactionCommand
// =========================================================================

/// Command to record a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionCommand {
    pub user_id: String,
    /// Signed amount; `None` when the request carried none
    pub amount: Option<Decimal>,
    pub description: Option<String>,
}

impl CreateTransactionCommand {
    pub fn new(user_id: impl Into<String>, amount: Decimal, description: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            amount: Some(amount),
            description: Some(description.into()),
        }
    }
}

// =========================================================================
// ListTransactionsQuery
// =========================================================================

/// Query for one page of a user's transactions
#[derive(Debug, Clone)]
pub struct ListTransactionsQuery {
    pub user_id: String,
    pub limit: u32,
    /// Opaque token from a previous page's `nextCursor`
    pub cursor: Option<String>,
}

impl ListTransactionsQuery {
    pub fn new(user_id: impl Into<String>, limit: u32) -> Self {
        Self {
            user_id: user_id.into(),
            limit,
            cursor: None,
        }
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// One page of transactions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub items: Vec<Transaction>,
    pub next_cursor: Option<String>,
}

// =========================================================================
// MonthlyBalanceQuery
// =========================================================================

/// Query for a user's balance within one month
#[derive(Debug, Clone)]
pub struct MonthlyBalanceQuery {
    pub user_id: String,
    /// Raw `YYYY-MM` token, validated by the handler
    pub month: Option<String>,
}

impl MonthlyBalanceQuery {
    pub fn new(user_id: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            month: Some(month.into()),
        }
    }
}

/// Sum of a user's amounts within a month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBalance {
    pub user_id: String,
    pub month: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}
