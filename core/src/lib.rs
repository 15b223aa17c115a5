//! # Import Flow - stage files, submit them as one batch
//!
//! The state machine behind the transaction import page: a user picks
//! files, they are staged in memory, and one action sends them all to the
//! import endpoint as a single multipart request.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────┐     ┌───────────┐
//! │ File Picker │────▶│  ImportFlow  │────▶│ ImportService  │────▶│  Status   │
//! │ (FileHandle)│     │   (staged)   │     │ (POST, 204 ok) │     │  message  │
//! └─────────────┘     └──────────────┘     └────────────────┘     └───────────┘
//! ```
//!
//! This crate does no I/O. Transports live in the native client
//! (`txn_import`) and in the browser frontend.
//!
//! ## Modules
//!
//! - [`flow`] - `ImportFlow`, staged files, submission halves
//! - [`status`] - `SubmissionStatus` and its localized rendering
//! - [`contract`] - picker and service seams, wire constants
//! - [`size`] - human-readable byte sizes
//! - [`locale`] - supported display locales
//! - [`error`] - error types

pub mod contract;
pub mod error;
pub mod flow;
pub mod locale;
pub mod size;
pub mod status;

// =============================================================================
// Re-exports
// =============================================================================

pub use contract::{
    endpoint_url, FileHandle, ImportService, ACCEPTED_EXTENSIONS, ACCEPTED_NO_CONTENT,
    FILE_FIELD, IMPORT_PATH,
};
pub use error::{ImportError, ImportResult, SubmitRejected, UnknownLocale};
pub use flow::{ImportFlow, PendingBatch, StagedFile, SubmissionTicket};
pub use locale::Locale;
pub use size::readable_size;
pub use status::{StatusMessage, StatusTone, SubmissionStatus};
