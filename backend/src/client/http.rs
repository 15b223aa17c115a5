//! HTTP transport: sends a batch of local files as one multipart request.

use import_flow::{
    endpoint_url, FileHandle, ImportError, ImportResult, ImportService, FILE_FIELD,
};
use reqwest::multipart::{Form, Part};

use super::local_file::LocalFile;

/// Posts batches to `{base_url}/transactions/import`.
#[derive(Debug, Clone)]
pub struct HttpImportService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpImportService {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: endpoint_url(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn build_form(files: &[LocalFile]) -> ImportResult<Form> {
        let mut form = Form::new();
        for file in files {
            let bytes = tokio::fs::read(file.path())
                .await
                .map_err(|e| ImportError::Read {
                    name: file.name(),
                    message: e.to_string(),
                })?;
            form = form.part(FILE_FIELD, Part::bytes(bytes).file_name(file.name()));
        }
        Ok(form)
    }
}

impl ImportService<LocalFile> for HttpImportService {
    async fn import(&self, files: &[LocalFile]) -> ImportResult<u16> {
        let form = Self::build_form(files).await?;

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ImportError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ImportError::Service {
                status: status.as_u16(),
                body,
            });
        }

        Ok(status.as_u16())
    }
}
