//! txn_balance Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod storage;

mod error;

pub use config::Config;
pub use domain::{Cursor, DomainError, Month, OperationContext, Transaction, ValidationResult};
pub use error::{AppError, AppResult, ErrorResponse};
pub use storage::{DynStorage, InMemoryStorage, PgStorage, StorageAdapter, StorageError};
