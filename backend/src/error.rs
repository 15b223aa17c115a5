//! Error types for the import client and the reference endpoint.
//!
//! - [`ClientError`] - picking local files for a batch
//! - [`ServerError`] - reference endpoint failures, rendered as JSON replies
//!
//! Failures of the import call itself are [`import_flow::ImportError`]s and
//! end up in the flow's status, never here.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::api::types::error_response;

// =============================================================================
// Client Errors
// =============================================================================

/// Errors while turning command-line paths into staged files.
#[derive(Debug, Error)]
pub enum ClientError {
    /// File metadata could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path exists but is not a regular file.
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),
}

// =============================================================================
// Server Errors
// =============================================================================

/// Reference endpoint errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Malformed or empty upload.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Request body over the configured limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Socket or storage failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        log::warn!("❌ {}", self);
        (self.status_code(), Json(error_response(&self.to_string()))).into_response()
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
