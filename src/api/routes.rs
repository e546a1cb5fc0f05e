//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{OperationContext, Transaction};
use crate::error::{AppError, AppResult};
use crate::handlers::{
    resolve_limit, BalanceCalculator, CreateTransactionCommand, ListTransactionsQuery,
    MonthlyBalance, MonthlyBalanceQuery, TransactionLister, TransactionPage, TransactionWriter,
};

use super::state::AppState;

// =========================================================================
// Request types
// =========================================================================

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    /// JSON number or decimal string
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListTransactionsParams {
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default, alias = "lastEvaluatedKey")]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BalanceParams {
    #[serde(default)]
    pub month: Option<String>,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/transactions", post(create_transaction))
        .route("/transactions/:user_id", get(list_transactions))
        .route("/balance/:user_id", get(get_balance))
}

fn context_or_default(context: Option<Extension<OperationContext>>) -> OperationContext {
    context.map(|Extension(context)| context).unwrap_or_default()
}

// =========================================================================
// POST /transactions
// =========================================================================

/// Record a transaction
async fn create_transaction(
    State(state): State<AppState>,
    context: Option<Extension<OperationContext>>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let context = context_or_default(context);

    let command = CreateTransactionCommand {
        user_id: request.user_id.unwrap_or_default(),
        amount: request.amount,
        description: request.description,
    };

    let transaction = TransactionWriter::new(state.storage)
        .execute(command, &context)
        .await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

// =========================================================================
// GET /transactions/:user_id
// =========================================================================

/// List a user's transactions, one page at a time
async fn list_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    context: Option<Extension<OperationContext>>,
    params: Result<Query<ListTransactionsParams>, QueryRejection>,
) -> AppResult<Json<TransactionPage>> {
    let Query(params) = params.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let context = context_or_default(context);

    let limit = resolve_limit(
        params.limit.as_deref(),
        state.settings.default_page_size,
        state.settings.max_page_size,
    )?;

    let mut query = ListTransactionsQuery::new(user_id, limit);
    if let Some(cursor) = params.cursor {
        query = query.with_cursor(cursor);
    }

    let page = TransactionLister::new(state.storage)
        .execute(query, &context)
        .await?;

    Ok(Json(page))
}

// =========================================================================
// GET /balance/:user_id
// =========================================================================

/// Monthly balance for a user
async fn get_balance(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    context: Option<Extension<OperationContext>>,
    params: Result<Query<BalanceParams>, QueryRejection>,
) -> AppResult<Json<MonthlyBalance>> {
    let Query(params) = params.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let context = context_or_default(context);

    let query = MonthlyBalanceQuery {
        user_id,
        month: params.month,
    };

    let balance = BalanceCalculator::new(state.storage)
        .with_page_size(state.settings.balance_page_size)
        .execute(query, &context)
        .await?;

    Ok(Json(balance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_request_accepts_number_or_string_amount() {
        let json = r#"{"userId": "123", "amount": 100, "description": "Pagamento"}"#;
        let request: CreateTransactionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, Some(dec!(100)));

        let json = r#"{"userId": "123", "amount": "-12.34", "description": "Saque"}"#;
        let request: CreateTransactionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, Some(dec!(-12.34)));
    }

    #[test]
    fn test_create_request_missing_fields() {
        let request: CreateTransactionRequest =
            serde_json::from_str(r#"{"userId": "123", "amount": 100}"#).unwrap();
        assert!(request.description.is_none());

        let request: CreateTransactionRequest = serde_json::from_str("{}").unwrap();
        assert!(request.user_id.is_none());
        assert!(request.amount.is_none());
    }

    #[test]
    fn test_list_params_accept_legacy_cursor_name() {
        let params: ListTransactionsParams =
            serde_json::from_str(r#"{"lastEvaluatedKey": "abcd"}"#).unwrap();
        assert_eq!(params.cursor.as_deref(), Some("abcd"));
        assert!(params.limit.is_none());
    }
}
