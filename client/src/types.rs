//! View state and actions for the item list.

use itemlist_store::Item;

/// State of the item list view.
///
/// Holds a transient, possibly-stale copy of the collection plus the
/// pending text input. The authoritative collection lives in the store;
/// this state is synchronized only at load time and after each confirmed
/// append.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemListState {
    /// Items as last observed from the service, in display order.
    pub items: Vec<Item>,
    /// Current content of the text input.
    pub pending_input: String,
}

impl ItemListState {
    /// Creates an empty view state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            pending_input: String::new(),
        }
    }

    /// Returns the number of displayed items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// Confirmed transitions of the item list view.
///
/// Every variant represents something that has already happened: a
/// keystroke, or a service call that succeeded. Failed service calls
/// never become actions; they are logged at the call site and the state
/// stays as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemListAction {
    /// The text input changed; replace the pending input wholesale.
    InputChanged(String),
    /// An initial load completed; replace the displayed items wholesale.
    ItemsLoaded(Vec<Item>),
    /// The service confirmed an append; show the returned item (with its
    /// store-assigned id) at the end of the list and clear the input.
    ItemAdded(Item),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = ItemListState::new();
        assert_eq!(state.count(), 0);
        assert!(state.pending_input.is_empty());
    }
}
