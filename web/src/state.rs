//! Application state for Axum handlers.

use itemlist_store::ItemStore;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Holds the explicitly constructed store value injected at startup. The
/// state is generic over the store implementation so tests can supply an
/// in-memory double.
pub struct AppState<S: ItemStore> {
    /// The item store owning the authoritative collection.
    pub store: Arc<S>,
}

impl<S: ItemStore> AppState<S> {
    /// Create application state over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

// Manual impl: `#[derive(Clone)]` would bound S itself on Clone.
impl<S: ItemStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemlist_store::InMemoryItemStore;

    #[test]
    fn test_state_is_clone() {
        let state = AppState::new(Arc::new(InMemoryItemStore::new()));
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.store, &cloned.store));
    }
}
