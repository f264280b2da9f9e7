//! Local filesystem storage implementation.
//!
//! Mirrors the output bucket under a directory, for local replays of
//! trigger events. Production deployments use `S3Store`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::error::{AppError, Result};
use crate::storage::{ResultStore, StoredObject};

/// Local filesystem result store.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root_dir: PathBuf,
}

impl LocalStore {
    /// Create a new LocalStore rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> Result<PathBuf> {
        let relative = Path::new(key);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("key escapes the storage root: {key}"),
            )));
        }
        Ok(self.root_dir.join(relative))
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl ResultStore for LocalStore {
    async fn put_json(&self, key: &str, body: Vec<u8>) -> Result<StoredObject> {
        let path = self.path(key)?;
        self.write_bytes(&path, &body).await?;

        info!("Wrote {} bytes to {}", body.len(), path.display());
        Ok(StoredObject {
            location: path.display().to_string(),
            size: body.len(),
        })
    }
}
