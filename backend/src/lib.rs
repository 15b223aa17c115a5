//! # txn-import - batch transaction imports from the command line
//!
//! Stages local files in an [`ImportFlow`](import_flow::ImportFlow) and sends
//! them to the import endpoint as one multipart request. Also ships a
//! reference endpoint that speaks the same contract.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────────┐     ┌──────────────────┐
//! │ local paths │────▶│  LocalFile   │────▶│ HttpImportService  │────▶│ POST /transactions│
//! │   (CLI)     │     │ (ImportFlow) │     │ (multipart, file)  │     │ /import  (204)    │
//! └─────────────┘     └──────────────┘     └────────────────────┘     └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use import_flow::ImportFlow;
//! use txn_import::{HttpImportService, LocalFile};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut flow = ImportFlow::default();
//!     flow.stage_files(vec![LocalFile::open("extrato.csv").await.unwrap()]);
//!     let status = flow.submit_batch(&HttpImportService::new("http://localhost:3333")).await;
//!     println!("{:?}", status);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] - local files and the HTTP transport
//! - [`api`] - reference import endpoint
//! - [`config`] - defaults and environment variable names
//! - [`error`] - error types

pub mod error;
pub mod config;

// Client
pub mod client;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ClientError, ClientResult, ServerError, ServerResult};
pub use config::ServerConfig;
pub use client::{HttpImportService, LocalFile};
pub use api::{ReceivedBatch, ReceivedFile};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server, ImportState};
}
