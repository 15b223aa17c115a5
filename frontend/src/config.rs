//! Application configuration.
//!
//! Centralized configuration for the import page.
//! In development, these are hardcoded. In production, they could be
//! injected at build time.

use import_flow::Locale;

/// Import API base URL.
///
/// `txn-import serve` listens here by default.
pub const API_URL: &str = "http://localhost:3333";

/// Locale for status lines and file sizes.
pub const LOCALE: Locale = Locale::PtBr;

/// Hint shown next to the send button.
pub const FORMAT_HINT: &str = "Permitido apenas arquivos CSV";
