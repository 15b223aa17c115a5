//! Reference import endpoint.
//!
//! An HTTP server that speaks the import contract, for local development
//! and for exercising the client end to end.

pub mod server;
pub mod types;

pub use server::{router, start_server, ImportState};
pub use types::*;
