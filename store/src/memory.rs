//! In-memory item store for tests and demos.

use crate::error::Result;
use crate::item::Item;
use crate::ItemStore;
use async_trait::async_trait;
use std::sync::Mutex;

/// Process-local item store backed by a `Vec`.
///
/// Ids are assigned from a monotonically increasing counter, mirroring the
/// auto-increment column of the relational schema. Insertion order is the
/// iteration order of [`ItemStore::list`].
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    items: Vec<Item>,
    next_id: i32,
}

impl InMemoryItemStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored items.
    ///
    /// # Panics
    ///
    /// Panics if the inner lock is poisoned.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().items.len()
    }

    /// Returns true if the store holds no items.
    ///
    /// # Panics
    ///
    /// Panics if the inner lock is poisoned.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().items.is_empty()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    #[allow(clippy::unwrap_used)]
    async fn list(&self) -> Result<Vec<Item>> {
        Ok(self.inner.lock().unwrap().items.clone())
    }

    #[allow(clippy::unwrap_used)]
    async fn append(&self, name: &str) -> Result<Item> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let item = Item::new(inner.next_id, name.to_string());
        inner.items.push(item.clone());
        Ok(item)
    }
}
