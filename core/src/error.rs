//! Error types for the import flow.
//!
//! - [`ImportError`] - failures of the remote import call
//! - [`SubmitRejected`] - submissions refused before any network call
//! - [`UnknownLocale`] - unparseable locale tags
//!
//! None of these escape [`crate::ImportFlow::submit_batch`]: the flow folds
//! them into a [`crate::SubmissionStatus`].

use thiserror::Error;

// =============================================================================
// Remote Import Errors
// =============================================================================

/// Errors from an [`crate::ImportService`] call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The request never got a response (DNS, connection refused, reset...).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status code.
    #[error("Server error ({status}): {body}")]
    Service { status: u16, body: String },

    /// A staged file could not be read when building the payload.
    #[error("Failed to read '{name}': {message}")]
    Read { name: String, message: String },

    /// The multipart payload could not be assembled.
    #[error("Failed to build request: {0}")]
    Payload(String),
}

// =============================================================================
// Submission Guard Errors
// =============================================================================

/// Reasons [`crate::ImportFlow::begin_submission`] refuses to start a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// Nothing is staged.
    #[error("No files selected")]
    NoFilesSelected,

    /// A previous batch has not completed yet.
    #[error("A submission is already in flight")]
    InFlight,
}

// =============================================================================
// Locale Errors
// =============================================================================

/// Locale tag not supported by [`crate::Locale`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown locale '{0}' (expected pt-BR or en)")]
pub struct UnknownLocale(pub String);

/// Result type for remote import calls.
pub type ImportResult<T> = Result<T, ImportError>;
