//! Files picked from the local filesystem.

use std::path::{Path, PathBuf};

use import_flow::FileHandle;

use crate::error::{ClientError, ClientResult};

/// A local file reference. Only metadata is read when it is picked; the
/// content is read when the batch is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    size: u64,
}

impl LocalFile {
    /// Pick a file by path.
    pub async fn open(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref().to_path_buf();
        let metadata = tokio::fs::metadata(&path).await.map_err(|source| ClientError::Io {
            path: path.clone(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(ClientError::NotAFile(path));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            size: metadata.len(),
            path,
        })
    }

    /// Pick several files, keeping their order. Fails on the first bad path.
    pub async fn open_all(paths: &[PathBuf]) -> ClientResult<Vec<Self>> {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            files.push(Self::open(path).await?);
        }
        Ok(files)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileHandle for LocalFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }
}
