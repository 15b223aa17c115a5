//! Reference HTTP endpoint for batch imports.
//!
//! Implements the import contract so the client and the browser page can be
//! exercised locally. It accepts and records batches; parsing the uploaded
//! transactions is the real service's job. Meant for development: only the
//! last [`MAX_RECORDED_BATCHES`] batches are kept in memory.
//!
//! # API Endpoints
//!
//! | Method | Path                   | Description                          |
//! |--------|------------------------|--------------------------------------|
//! | GET    | `/health`              | Health check                         |
//! | POST   | `/transactions/import` | Multipart batch, one `file` per part |
//! | GET    | `/batches`             | Batches accepted so far              |

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use import_flow::{FILE_FIELD, IMPORT_PATH};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::types::{sanitize_file_name, ReceivedBatch, ReceivedFile};
use crate::config::{ServerConfig, MAX_RECORDED_BATCHES};
use crate::error::{ServerError, ServerResult};

/// Shared endpoint state.
#[derive(Debug, Clone)]
pub struct ImportState {
    batches: Arc<Mutex<Vec<ReceivedBatch>>>,
    store_dir: Option<PathBuf>,
    history_limit: usize,
}

impl Default for ImportState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ImportState {
    pub fn new(store_dir: Option<PathBuf>) -> Self {
        Self {
            batches: Arc::default(),
            store_dir,
            history_limit: MAX_RECORDED_BATCHES,
        }
    }

    /// Keep at most `limit` batches in memory.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Snapshot of accepted batches, oldest first.
    pub fn batches(&self) -> Vec<ReceivedBatch> {
        self.batches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, batch: ReceivedBatch) {
        let mut batches = self
            .batches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        batches.push(batch);
        if batches.len() > self.history_limit {
            let excess = batches.len() - self.history_limit;
            batches.drain(..excess);
        }
    }
}

/// Build the endpoint router.
pub fn router(state: ImportState, max_body_bytes: usize) -> Router {
    // Permissive CORS so the browser page can post from another origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route(IMPORT_PATH, post(import_batch))
        .route("/batches", get(list_batches))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    if let Some(dir) = &config.store_dir {
        tokio::fs::create_dir_all(dir).await?;
    }

    let state = ImportState::new(config.store_dir.clone());
    let app = router(state, config.max_body_bytes);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    log::info!("🚀 Import endpoint running on http://localhost:{}", config.port);
    log::info!("   POST {} - Import a batch of files", IMPORT_PATH);
    log::info!("   GET  /batches - Accepted batches");
    log::info!("   GET  /health - Health check");
    match &config.store_dir {
        Some(dir) => log::info!("💾 Storing batches under {}", dir.display()),
        None => log::info!("💾 Batches kept in memory only"),
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "transaction-import",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "import": format!("POST {}", IMPORT_PATH),
            "batches": "GET /batches"
        }
    }))
}

async fn list_batches(State(state): State<ImportState>) -> Json<Vec<ReceivedBatch>> {
    Json(state.batches())
}

/// Batch import endpoint. Every part named `file` is one file of the batch.
async fn import_batch(
    State(state): State<ImportState>,
    mut multipart: Multipart,
) -> Result<StatusCode, ServerError> {
    let mut files: Vec<ReceivedFile> = Vec::new();
    let mut contents: Vec<Vec<u8>> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Multipart error", e))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        if field_name != FILE_FIELD {
            log::debug!("Ignoring multipart field '{}'", field_name);
            continue;
        }

        let name = field
            .file_name()
            .and_then(sanitize_file_name)
            .unwrap_or_else(|| format!("file-{}", files.len() + 1));
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Read error", e))?;

        files.push(ReceivedFile {
            name,
            size: bytes.len() as u64,
        });
        contents.push(bytes.to_vec());
    }

    if files.is_empty() {
        return Err(ServerError::BadRequest("No file provided".into()));
    }

    let batch = ReceivedBatch::new(files);

    if let Some(dir) = &state.store_dir {
        store_batch(dir, &batch, &contents).await?;
    }

    log::info!(
        "📄 Batch {}: {} file(s), {} bytes",
        batch.id,
        batch.files.len(),
        batch.total_bytes()
    );
    for file in &batch.files {
        log::info!("   {} ({} bytes)", file.name, file.size);
    }

    state.record(batch);

    Ok(StatusCode::NO_CONTENT)
}

/// Over-limit bodies become 413, anything else 400.
fn multipart_error(context: &str, e: MultipartError) -> ServerError {
    let message = format!("{}: {}", context, e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge(message)
    } else {
        ServerError::BadRequest(message)
    }
}

/// Writes every file of the batch under `dir/<batch id>/`. On failure the
/// batch directory is removed so no partial batch is left behind.
async fn store_batch(dir: &Path, batch: &ReceivedBatch, contents: &[Vec<u8>]) -> ServerResult<()> {
    let batch_dir = dir.join(batch.id.to_string());
    tokio::fs::create_dir_all(&batch_dir).await?;

    for (index, (file, bytes)) in batch.files.iter().zip(contents).enumerate() {
        // Prefix keeps same-named parts apart
        let path = batch_dir.join(format!("{:03}-{}", index + 1, file.name));
        if let Err(e) = tokio::fs::write(&path, bytes).await {
            if let Err(cleanup) = tokio::fs::remove_dir_all(&batch_dir).await {
                log::warn!("Failed to remove {}: {}", batch_dir.display(), cleanup);
            }
            return Err(e.into());
        }
    }

    Ok(())
}
