//! Handlers module
//!
//! Command and query handlers that orchestrate the business operations.
//! Each handler receives the storage capability explicitly.

mod balance_handler;
mod commands;
mod list_handler;
mod write_handler;


pub use balance_handler::{BalanceCalculator, DEFAULT_BALANCE_PAGE_SIZE};
pub use commands::*;
pub use list_handler::{resolve_limit, TransactionLister};
pub use write_handler::TransactionWriter;
