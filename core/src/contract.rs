//! Seams to the two external collaborators: the file picker and the
//! remote import service.
//!
//! The flow never touches I/O itself. A picker hands it [`FileHandle`]s and a
//! transport implements [`ImportService`] for the same handle type.

use std::future::Future;

use crate::error::ImportResult;

/// Path of the remote import endpoint.
pub const IMPORT_PATH: &str = "/transactions/import";

/// Multipart field shared by every file of a batch.
pub const FILE_FIELD: &str = "file";

/// The only status code treated as a successful import.
pub const ACCEPTED_NO_CONTENT: u16 = 204;

/// Extensions the picker advertises. Shown as a hint, never enforced.
pub const ACCEPTED_EXTENSIONS: &str = ".csv";

/// A file selected by the user, as exposed by the picker.
///
/// Implementors are cheap, non-owning references: cloning one must not copy
/// the file's content.
pub trait FileHandle: Clone {
    /// Display name.
    fn name(&self) -> String;

    /// Length in bytes.
    fn size(&self) -> u64;
}

/// Sends a batch of staged files to the remote import endpoint.
///
/// Implementations attach every file under [`FILE_FIELD`], in slice order,
/// and resolve to the HTTP status code of a 2xx reply. Anything else
/// (connection failure, non-2xx status, unreadable file) is an error.
pub trait ImportService<H: FileHandle> {
    fn import(&self, files: &[H]) -> impl Future<Output = ImportResult<u16>>;
}

/// Builds the full endpoint URL from a base URL.
///
/// ```
/// assert_eq!(
///     import_flow::endpoint_url("http://localhost:3333/"),
///     "http://localhost:3333/transactions/import"
/// );
/// ```
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), IMPORT_PATH)
}
