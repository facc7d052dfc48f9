//! User repository backed by a single JSON document.
//!
//! The whole collection is read and rewritten as one unit on every
//! mutation; there is no index and no partial update.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::domain::UserRecord;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create an empty document if none exists. Idempotent.
    async fn ensure_initialized(&self) -> AppResult<()>;

    /// Load every record in stored order.
    ///
    /// A missing document reads as empty; a document that does not parse is
    /// reported as [`AppError::StoreCorrupt`].
    async fn read_all(&self) -> AppResult<Vec<UserRecord>>;

    /// Replace the persisted document with `records`.
    async fn write_all(&self, records: &[UserRecord]) -> AppResult<()>;
}

/// Concrete implementation of UserRepository over a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next document is staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "users.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    async fn create_parent_dir(&self) -> AppResult<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).await?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn encode(records: &[UserRecord]) -> AppResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(records)?)
    }
}

#[async_trait]
impl UserRepository for JsonFileStore {
    async fn ensure_initialized(&self) -> AppResult<()> {
        self.create_parent_dir().await?;

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                tracing::debug!(path = %self.path.display(), "user store already present");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        file.write_all(&Self::encode(&[])?).await?;
        file.sync_all().await?;
        tracing::info!(path = %self.path.display(), "created empty user store");
        Ok(())
    }

    async fn read_all(&self) -> AppResult<Vec<UserRecord>> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&json).map_err(|source| {
            tracing::error!(path = %self.path.display(), "user store does not parse: {}", source);
            AppError::StoreCorrupt {
                path: self.path.clone(),
                source,
            }
        })
    }

    async fn write_all(&self, records: &[UserRecord]) -> AppResult<()> {
        let bytes = Self::encode(records)?;
        let staging = self.staging_path();

        let mut file = fs::File::create(&staging).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&staging, &self.path).await?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "user store written");
        Ok(())
    }
}
