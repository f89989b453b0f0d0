//! `PostgreSQL` implementation of the item store.
//!
//! The pool is constructed explicitly by the caller (or via
//! [`PostgresItemStore::connect`]) and owned by the store value, so the
//! store's lifetime and connection lifecycle are visible at the call site
//! rather than hidden in process-wide state.

use crate::error::{Result, StoreError};
use crate::item::Item;
use crate::ItemStore;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// `PostgreSQL`-backed item store.
///
/// # Example
///
/// ```ignore
/// let store = PostgresItemStore::connect("postgres://localhost/itemlist").await?;
/// store.migrate().await?;
/// ```
#[derive(Clone)]
pub struct PostgresItemStore {
    /// `PostgreSQL` connection pool.
    pool: PgPool,
}

impl PostgresItemStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the given database URL with a fresh pool.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the connection cannot be
    /// established.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Database(format!("failed to connect: {e}")))?;
        Ok(Self::new(pool))
    }

    /// Runs the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Migration`] if a migration fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ItemStore for PostgresItemStore {
    async fn list(&self) -> Result<Vec<Item>> {
        // Plain scan, no ORDER BY: the collection contract leaves ordering
        // to the store.
        let items = sqlx::query_as::<_, Item>("SELECT id, name FROM items")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to list items");
                StoreError::from(e)
            })?;
        Ok(items)
    }

    async fn append(&self, name: &str) -> Result<Item> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to insert item");
            StoreError::from(e)
        })?;
        Ok(item)
    }
}
