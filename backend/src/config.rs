//! Runtime configuration.
//!
//! Values come from command-line flags, falling back to environment
//! variables (a `.env` file is loaded at startup), then to these defaults.

use std::path::PathBuf;

/// Base URL of the import API.
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Port the reference endpoint listens on.
pub const DEFAULT_PORT: u16 = 3333;

/// Largest accepted request body (50 MB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Accepted batches kept in memory for `GET /batches`; older ones are dropped.
pub const MAX_RECORDED_BATCHES: usize = 100;

/// Environment variable names.
pub mod env {
    pub const API_URL: &str = "IMPORT_API_URL";
    pub const LOCALE: &str = "IMPORT_LOCALE";
    pub const PORT: &str = "IMPORT_PORT";
    pub const STORE_DIR: &str = "IMPORT_STORE_DIR";
    pub const MAX_BODY_BYTES: &str = "IMPORT_MAX_BODY_BYTES";
}

/// Reference endpoint settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Where accepted batches are written; in-memory only when unset.
    pub store_dir: Option<PathBuf>,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            store_dir: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
