//! Types exchanged by the reference import endpoint.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

/// One file part of an accepted batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedFile {
    /// Sanitized file name
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

/// A batch accepted by `POST /transactions/import`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedBatch {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    /// Files in the order their parts arrived
    pub files: Vec<ReceivedFile>,
}

impl ReceivedBatch {
    pub fn new(files: Vec<ReceivedFile>) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            files,
        }
    }

    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "status": "error",
        "error": error,
    })
}

/// Reduces a client-supplied file name to a safe single path component.
///
/// Returns `None` when nothing usable is left.
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    // Browsers on Windows may send full paths
    let last = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let base = Path::new(last).file_name()?.to_string_lossy();

    let cleaned: String = base
        .chars()
        .map(|c| match c {
            c if c.is_control() => '_',
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect();

    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_plain_names() {
        assert_eq!(sanitize_file_name("extrato.csv").as_deref(), Some("extrato.csv"));
        assert_eq!(
            sanitize_file_name("março 2024.csv").as_deref(),
            Some("março 2024.csv")
        );
    }

    #[test]
    fn test_sanitize_strips_paths() {
        assert_eq!(sanitize_file_name("../../etc/passwd").as_deref(), Some("passwd"));
        assert_eq!(
            sanitize_file_name("C:\\Users\\ana\\extrato.csv").as_deref(),
            Some("extrato.csv")
        );
    }

    #[test]
    fn test_sanitize_rejects_empty() {
        assert_eq!(sanitize_file_name(""), None);
        assert_eq!(sanitize_file_name(".."), None);
        assert_eq!(sanitize_file_name("dir/"), None);
    }

    #[test]
    fn test_error_response_shape() {
        let body = error_response("No file provided");
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"], "No file provided");
    }

    #[test]
    fn test_batch_total_bytes() {
        let batch = ReceivedBatch::new(vec![
            ReceivedFile { name: "a.csv".into(), size: 10 },
            ReceivedFile { name: "b.csv".into(), size: 32 },
        ]);
        assert_eq!(batch.total_bytes(), 42);
    }
}
