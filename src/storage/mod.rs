//! Storage module
//!
//! The store behind the handlers: an opaque key-value table queried through
//! a secondary index on `userId`.

mod adapter;
mod memory;
mod postgres;

pub use adapter::{DynStorage, Page, QueryOptions, StorageAdapter, StorageError};
pub use memory::InMemoryStorage;
pub use postgres::PgStorage;
