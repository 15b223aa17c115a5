//! Backend services.
//!
//! - [`import`] - batch upload to the transaction import endpoint

pub mod import;

pub use import::*;
