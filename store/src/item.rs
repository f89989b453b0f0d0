//! The sole persisted entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single item in the collection.
///
/// The `id` is assigned by the store on creation and never changes; the
/// `name` is set at creation and never updated (no update or delete
/// operations exist in this system).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Store-assigned identifier (auto-increment primary key).
    pub id: i32,
    /// Name supplied at creation. Any string, including empty.
    pub name: String,
}

impl Item {
    /// Creates an item from its parts.
    #[must_use]
    pub const fn new(id: i32, name: String) -> Self {
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_to_wire_shape() {
        let item = Item::new(7, "milk".to_string());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "name": "milk"}));
    }

    #[test]
    fn item_round_trips_empty_name() {
        let item = Item::new(1, String::new());
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
