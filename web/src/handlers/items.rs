//! Handlers for the item collection resource.
//!
//! Two operations exist: list every item and append one item. Both are
//! single stateless round trips to the store; there is no update, delete,
//! pagination, or ordering guarantee.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use itemlist_store::{Item, ItemStore};
use serde::{Deserialize, Serialize};

/// Request body for creating an item.
///
/// Presence and type of `name` are enforced by the extractor; the value
/// itself is unconstrained (the empty string is accepted and stored as-is).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateItemRequest {
    /// Name of the item to create.
    pub name: String,
}

/// List every stored item.
///
/// # Endpoint
///
/// ```text
/// GET /api/data
/// ```
///
/// # Response
///
/// ```json
/// [
///   {"id": 1, "name": "milk"}
/// ]
/// ```
///
/// # Errors
///
/// Returns an opaque 500 if the store is unreachable or the query fails.
pub async fn list_items<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Item>>, AppError>
where
    S: ItemStore,
{
    let items = state.store.list().await?;
    Ok(Json(items))
}

/// Append one item to the collection.
///
/// # Endpoint
///
/// ```text
/// POST /api/data
/// Content-Type: application/json
///
/// {"name": "milk"}
/// ```
///
/// # Response
///
/// The created item, including its store-assigned id:
///
/// ```json
/// {"id": 2, "name": "milk"}
/// ```
///
/// # Errors
///
/// Returns an opaque 500 if the store is unreachable or the insert fails.
pub async fn create_item<S>(
    State(state): State<AppState<S>>,
    Json(request): Json<CreateItemRequest>,
) -> Result<Json<Item>, AppError>
where
    S: ItemStore,
{
    let item = state.store.append(&request.name).await?;
    Ok(Json(item))
}
