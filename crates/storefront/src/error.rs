//! Unified error handling for route handlers.
//!
//! Provides a unified `AppError` type that logs server-side failures before
//! responding to the client. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::agent::ChatError;
use crate::catalog::CatalogError;
use crate::sanity::SanityError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Content store operation failed.
    #[error("Sanity error: {0}")]
    Sanity(#[from] SanityError),

    /// Catalog store operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Assistant exchange failed.
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server-side failures with full detail
        if matches!(
            self,
            Self::Sanity(_) | Self::Catalog(_) | Self::Chat(_) | Self::Internal(_)
        ) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Sanity(SanityError::NotFound(_)) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Sanity(_) | Self::Catalog(_) => StatusCode::BAD_GATEWAY,
            Self::Chat(ChatError::NoUserMessage) => StatusCode::BAD_REQUEST,
            Self::Chat(_) => StatusCode::BAD_GATEWAY,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Sanity(SanityError::NotFound(_)) | Self::NotFound(_) => "Not found".to_string(),
            Self::Sanity(_) | Self::Catalog(_) => "Content store error".to_string(),
            Self::Chat(ChatError::NoUserMessage) => {
                "Conversation must end with a user message".to_string()
            }
            Self::Chat(_) => "Assistant error".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Unauthorized(msg) | Self::BadRequest(msg) => msg.clone(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
