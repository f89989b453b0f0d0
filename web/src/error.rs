//! Error types for web handlers.
//!
//! This module defines the error type that bridges between store errors
//! and HTTP responses, implementing Axum's `IntoResponse` trait.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use itemlist_store::StoreError;
use serde::Serialize;
use std::fmt;

/// Application error type for web handlers.
///
/// Wraps failures from the persistence layer and provides HTTP-friendly
/// responses. Store failures are deliberately opaque: the client sees a
/// generic 500 body while the underlying cause goes to the log.
///
/// # Examples
///
/// ```ignore
/// async fn handler() -> Result<Json<Vec<Item>>, AppError> {
///     let items = store.list().await?;
///     Ok(Json(items))
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            source: None,
        }
    }

    /// Create a new error with a source error.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Human-readable error message.
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log internal errors with their cause; the client only sees the
        // generic message.
        if self.status.is_server_error() {
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    message = %self.message,
                    error = %source,
                    "Internal server error"
                );
            } else {
                tracing::error!(
                    status = %self.status,
                    message = %self.message,
                    "Internal server error"
                );
            }
        }

        let body = ErrorResponse {
            error: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

/// Any store failure surfaces as an opaque 500.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::internal().with_source(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::internal();
        assert_eq!(
            err.to_string(),
            "[500 Internal Server Error] Internal Server Error"
        );
    }

    #[test]
    fn test_store_error_maps_to_500() {
        let err = AppError::from(StoreError::Database("connection refused".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_error_message_not_leaked() {
        let err = AppError::from(StoreError::Database("secret dsn".to_string()));
        assert_eq!(err.message, "Internal Server Error");
    }
}
