//! Transaction record
//!
//! An immutable, signed monetary amount recorded for a user.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted transaction.
///
/// Positive amounts are credits, negative amounts are debits. `created_at`
/// holds the ISO-8601 text exactly as stored, so its first seven characters
/// are the `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub description: String,
    pub created_at: String,
}

impl Transaction {
    /// Build a new transaction with a fresh ID, stamped at `now`.
    pub fn new(
        user_id: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            amount,
            description: description.into(),
            created_at: format_timestamp(now),
        }
    }

    /// Key of this record in the user index, used to resume a query after it
    pub fn start_key(&self) -> StartKey {
        StartKey {
            id: self.id,
            user_id: self.user_id.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

/// Position in the user index: the last item a query evaluated.
///
/// Items are ordered by `(created_at, id)` within a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartKey {
    pub id: Uuid,
    pub user_id: String,
    pub created_at: String,
}

/// Format a timestamp as UTC ISO-8601 with millisecond precision, e.g.
/// `2025-04-01T00:00:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
