//! Write Handler
//!
//! Validates and records new transactions.

use chrono::Utc;

use crate::domain::{validate, DomainError, OperationContext, Transaction};
use crate::error::AppError;
use crate::storage::DynStorage;

use super::CreateTransactionCommand;

/// Handler for recording transactions
pub struct TransactionWriter {
    storage: DynStorage,
}

impl TransactionWriter {
    pub fn new(storage: DynStorage) -> Self {
        Self { storage }
    }

    /// Execute the create command.
    ///
    /// Nothing is written unless validation passes. Every successful call
    /// writes exactly one new record, even for a repeat of an earlier request.
    pub async fn execute(
        &self,
        command: CreateTransactionCommand,
        context: &OperationContext,
    ) -> Result<Transaction, AppError> {
        let amount = command.amount.ok_or(DomainError::MissingAmount)?;
        validate(amount, command.description.as_deref()).into_result()?;

        if command.user_id.trim().is_empty() {
            return Err(DomainError::MissingUserId.into());
        }

        let description = command.description.unwrap_or_default();
        let transaction = Transaction::new(command.user_id, amount, description, Utc::now());

        self.storage
            .put_item(&transaction)
            .await
            .map_err(AppError::Persistence)?;

        tracing::info!(
            transaction_id = %transaction.id,
            user_id = %transaction.user_id,
            correlation_id = ?context.correlation_id,
            "transaction saved"
        );

        Ok(transaction)
    }
}
