//! Imperative shell driving the item list view.

use crate::api::ApiClient;
use crate::reducer::ItemListReducer;
use crate::types::{ItemListAction, ItemListState};
use itemlist_store::Item;

/// The interactive item list view.
///
/// Wires the pure state ([`ItemListState`]) to the service via
/// [`ApiClient`]. Every method that talks to the service applies its
/// state transition only after the call has succeeded; failures are
/// logged through `tracing` and swallowed, leaving the state exactly as
/// it was.
pub struct ItemListView {
    state: ItemListState,
    client: ApiClient,
}

impl ItemListView {
    /// Creates a view with an empty state over the given client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self {
            state: ItemListState::new(),
            client,
        }
    }

    /// Loads the collection from the service, replacing the displayed
    /// list on success.
    ///
    /// On failure the error is logged and the view keeps its current
    /// (initially empty) list; there is no user-visible error surface.
    pub async fn load(&mut self) {
        match self.client.fetch_items().await {
            Ok(items) => {
                ItemListReducer::apply(&mut self.state, ItemListAction::ItemsLoaded(items));
            }
            Err(error) => {
                tracing::error!(%error, "failed to fetch items");
            }
        }
    }

    /// Records a change to the text input (called on every keystroke).
    pub fn input_changed(&mut self, text: impl Into<String>) {
        ItemListReducer::apply(&mut self.state, ItemListAction::InputChanged(text.into()));
    }

    /// Submits the pending input as a new item.
    ///
    /// On success the item returned by the service (carrying its
    /// store-assigned id) is appended to the displayed list and the
    /// pending input is cleared. On failure the error is logged and both
    /// the input and the list stay unchanged.
    pub async fn add(&mut self) {
        let name = self.state.pending_input.clone();
        match self.client.create_item(&name).await {
            Ok(item) => {
                ItemListReducer::apply(&mut self.state, ItemListAction::ItemAdded(item));
            }
            Err(error) => {
                tracing::error!(%error, "failed to add item");
            }
        }
    }

    /// Returns the current view state.
    #[must_use]
    pub const fn state(&self) -> &ItemListState {
        &self.state
    }

    /// Returns the displayed items.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    /// Returns the pending text input.
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.state.pending_input
    }
}
