//! HTTP client for the collection service.

use itemlist_store::Item;
use serde::Serialize;
use thiserror::Error;

/// Failure of an HTTP call to the collection service.
///
/// This is the client-side counterpart of the service's opaque 500: the
/// caller learns that the call failed, logs it, and moves on. No retry
/// is attempted anywhere in this system.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (connect, DNS, timeout, body decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

/// Request body for creating an item.
#[derive(Debug, Serialize)]
struct CreateItemRequest<'a> {
    name: &'a str,
}

/// Typed client for the `/api/data` resource.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for a service at the given base URL
    /// (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches every item from the service.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the call fails or the service reports
    /// a non-success status.
    pub async fn fetch_items(&self) -> Result<Vec<Item>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/data", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Creates an item with the given name, returning the created item
    /// with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the call fails or the service reports
    /// a non-success status.
    pub async fn create_item(&self, name: &str) -> Result<Item, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/data", self.base_url))
            .json(&CreateItemRequest { name })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = ClientError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "server returned 500 Internal Server Error");
    }

    #[test]
    fn create_request_wire_shape() {
        let body = serde_json::to_value(CreateItemRequest { name: "milk" }).unwrap();
        assert_eq!(body, serde_json::json!({"name": "milk"}));
    }
}
