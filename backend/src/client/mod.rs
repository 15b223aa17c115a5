//! Native import client.
//!
//! - [`LocalFile`] - a picked file on disk
//! - [`HttpImportService`] - multipart transport to the import endpoint

mod http;
mod local_file;

pub use http::HttpImportService;
pub use local_file::LocalFile;
