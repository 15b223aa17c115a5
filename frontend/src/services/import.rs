//! HTTP service posting staged files to the import endpoint.

use gloo_net::http::Request;
use import_flow::{
    endpoint_url, FileHandle, ImportError, ImportResult, ImportService, FILE_FIELD,
};
use web_sys::{File, FileList, FormData};

/// A file picked in the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile(pub File);

impl FileHandle for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// Collects a `FileList` (input or drop) into handles, keeping its order.
pub fn files_from_list(list: &FileList) -> Vec<BrowserFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile)
        .collect()
}

/// Sends batches with `fetch` as `multipart/form-data`.
#[derive(Debug, Clone)]
pub struct BrowserImportService {
    endpoint: String,
}

impl BrowserImportService {
    pub fn new(api_url: &str) -> Self {
        Self {
            endpoint: endpoint_url(api_url),
        }
    }
}

impl ImportService<BrowserFile> for BrowserImportService {
    async fn import(&self, files: &[BrowserFile]) -> ImportResult<u16> {
        let form_data = FormData::new()
            .map_err(|e| ImportError::Payload(format!("Failed to create FormData: {:?}", e)))?;

        // Same field for every file
        for file in files {
            form_data
                .append_with_blob_and_filename(FILE_FIELD, &file.0, &file.0.name())
                .map_err(|e| ImportError::Payload(format!("Failed to append file: {:?}", e)))?;
        }

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| ImportError::Payload(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ImportError::Transport(e.to_string()))?;

        if !response.ok() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ImportError::Service {
                status: response.status(),
                body,
            });
        }

        Ok(response.status())
    }
}
