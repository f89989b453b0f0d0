//! Client view component for the itemlist collection service.
//!
//! Follows the "Functional Core, Imperative Shell" split: view state and
//! its transitions are pure values ([`ItemListState`], [`ItemListAction`],
//! [`ItemListReducer`]), while HTTP calls live in the shell
//! ([`ItemListView`] over [`ApiClient`]). A transition is applied only
//! after the service call it depends on has confirmed success; failed
//! calls are logged and leave the state untouched.
//!
//! # Example
//!
//! ```ignore
//! use itemlist_client::{ApiClient, ItemListView};
//!
//! let mut view = ItemListView::new(ApiClient::new("http://localhost:3000"));
//! view.load().await;
//! view.input_changed("milk");
//! view.add().await;
//! assert!(view.state().pending_input.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod reducer;
pub mod types;
pub mod view;

pub use api::{ApiClient, ClientError};
pub use reducer::ItemListReducer;
pub use types::{ItemListAction, ItemListState};
pub use view::ItemListView;
