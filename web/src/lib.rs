//! Axum HTTP surface for the itemlist collection service.
//!
//! The service exposes one resource, `/api/data`, with two operations:
//! list every item and append one item. Persistence is delegated to an
//! [`ItemStore`](itemlist_store::ItemStore) injected at startup.
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract data** from the request (typed JSON body)
//! 3. **Delegate** to the injected store
//! 4. **Map result** to an HTTP response (store failures become an
//!    opaque 500)
//!
//! # Example
//!
//! ```ignore
//! use itemlist_store::PostgresItemStore;
//! use itemlist_web::app;
//! use std::sync::Arc;
//!
//! let store = Arc::new(PostgresItemStore::connect(&url).await?);
//! let router = app(store);
//! axum::serve(listener, router).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod handlers;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use itemlist_store::ItemStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;

/// Builds the application router over the given store.
///
/// # Routes
///
/// - `GET /api/data` - list every item
/// - `POST /api/data` - append one item
/// - `GET /health` - liveness probe
pub fn app<S>(store: Arc<S>) -> Router
where
    S: ItemStore + 'static,
{
    Router::new()
        .route(
            "/api/data",
            get(handlers::items::list_items::<S>).post(handlers::items::create_item::<S>),
        )
        .route("/health", get(handlers::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(store))
}
