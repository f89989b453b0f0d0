//! Pure state transitions for the item list view.

use crate::types::{ItemListAction, ItemListState};

/// Reducer for the item list view.
///
/// All transitions are pure and infallible: by the time an action reaches
/// the reducer, any service call behind it has already succeeded.
#[derive(Clone, Debug, Default)]
pub struct ItemListReducer;

impl ItemListReducer {
    /// Creates a new `ItemListReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies an action to the view state.
    pub fn apply(state: &mut ItemListState, action: ItemListAction) {
        match action {
            ItemListAction::InputChanged(text) => {
                state.pending_input = text;
            }
            ItemListAction::ItemsLoaded(items) => {
                state.items = items;
            }
            ItemListAction::ItemAdded(item) => {
                state.items.push(item);
                state.pending_input.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemlist_store::Item;

    #[test]
    fn input_changed_replaces_pending_input() {
        let mut state = ItemListState::new();

        ItemListReducer::apply(&mut state, ItemListAction::InputChanged("mi".to_string()));
        assert_eq!(state.pending_input, "mi");

        ItemListReducer::apply(&mut state, ItemListAction::InputChanged("milk".to_string()));
        assert_eq!(state.pending_input, "milk");
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn items_loaded_replaces_list_wholesale() {
        let mut state = ItemListState::new();
        state.items.push(Item::new(99, "stale".to_string()));

        ItemListReducer::apply(
            &mut state,
            ItemListAction::ItemsLoaded(vec![
                Item::new(1, "milk".to_string()),
                Item::new(2, "eggs".to_string()),
            ]),
        );

        assert_eq!(state.count(), 2);
        assert_eq!(state.items[0].id, 1);
        assert_eq!(state.items[1].id, 2);
    }

    #[test]
    fn item_added_appends_and_clears_input() {
        let mut state = ItemListState {
            items: vec![Item::new(1, "milk".to_string())],
            pending_input: "eggs".to_string(),
        };

        ItemListReducer::apply(&mut state, ItemListAction::ItemAdded(Item::new(2, "eggs".to_string())));

        assert_eq!(state.count(), 2);
        assert_eq!(state.items.last().map(|i| i.id), Some(2));
        assert!(state.pending_input.is_empty());
    }

    #[test]
    fn item_added_uses_server_assigned_id() {
        let mut state = ItemListState::new();

        // The view never guesses ids; whatever the service returned is
        // what gets displayed.
        ItemListReducer::apply(&mut state, ItemListAction::ItemAdded(Item::new(42, "milk".to_string())));

        assert_eq!(state.items[0].id, 42);
    }
}
