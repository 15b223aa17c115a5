//! UI Components for the import page.
//!
//! - [`ImportPage`] - the page itself, owner of the import flow state
//! - [`UploadZone`] - file picker with drag & drop
//! - [`FileList`] - staged files with readable sizes
//! - [`StatusLine`] - localized result of the last submission

mod file_list;
mod import_page;
mod status;
mod upload;

pub use file_list::*;
pub use import_page::*;
pub use status::*;
pub use upload::*;
