//! Persistence layer for the itemlist collection.
//!
//! This crate owns the single domain entity ([`Item`]) and the seam through
//! which the rest of the system reaches the relational store: the
//! [`ItemStore`] trait. Two implementations are provided:
//!
//! - [`PostgresItemStore`]: production storage over a `PostgreSQL` pool,
//!   using sqlx with embedded migrations.
//! - [`InMemoryItemStore`]: a process-local double for tests and demos.
//!
//! # Example
//!
//! ```ignore
//! use itemlist_store::{ItemStore, PostgresItemStore};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = PostgresItemStore::connect("postgres://localhost/itemlist").await?;
//!     store.migrate().await?;
//!     let item = store.append("first").await?;
//!     assert_eq!(store.list().await?.last().map(|i| i.id), Some(item.id));
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod item;
pub mod memory;
pub mod postgres;

pub use error::{Result, StoreError};
pub use item::Item;
pub use memory::InMemoryItemStore;
pub use postgres::PostgresItemStore;

use async_trait::async_trait;

/// Storage seam for the item collection.
///
/// The collection supports exactly two operations: a full scan and a single
/// row append. There is no update or delete; an [`Item`] is immutable once
/// created. Implementations decide the iteration order of [`ItemStore::list`];
/// callers must not rely on any particular ordering.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Returns every stored item.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store is unreachable or the query fails.
    /// No partial results are returned.
    async fn list(&self) -> Result<Vec<Item>>;

    /// Stores a new item with the given name and a store-assigned id.
    ///
    /// Any string is accepted, including the empty string. Returns the
    /// created item with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store is unreachable or the insert fails.
    async fn append(&self, name: &str) -> Result<Item>;
}
