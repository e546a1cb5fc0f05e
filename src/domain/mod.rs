//! Domain module
//!
//! Core domain types and business rules.

pub mod context;
pub mod cursor;
pub mod error;
pub mod month;
pub mod transaction;
pub mod validation;

pub use context::OperationContext;
pub use cursor::Cursor;
pub use error::DomainError;
pub use month::{created_at_prefix, Month};
pub use transaction::{format_timestamp, StartKey, Transaction};
pub use validation::{validate, ValidationResult};
