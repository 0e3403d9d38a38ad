//! File-backed terms store.
//!
//! Each write goes to its own sibling temporary file, is synced, and is then
//! renamed over the target. Readers never observe a partially written
//! document and concurrent writers never share a temporary file.

use crate::ports::outbound::{StoreError, TermsStore};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persists the current terms to a single file.
#[derive(Debug, Clone)]
pub struct FileTermsStore {
    path: PathBuf,
}

impl FileTermsStore {
    /// Store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fresh temporary path next to the target, unique per write.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        name.push(format!(".{}.{}.tmp", std::process::id(), seq));
        self.path.with_file_name(name)
    }

    async fn write_synced(temp: &Path, content: &str) -> std::io::Result<()> {
        let mut file = tokio::fs::File::create(temp).await?;
        file.write_all(content.as_bytes()).await?;
        file.sync_all().await
    }
}

#[async_trait::async_trait]
impl TermsStore for FileTermsStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| StoreError::Corrupt),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, content: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let temp = self.temp_path();
        let written = match Self::write_synced(&temp, content).await {
            Ok(()) => tokio::fs::rename(&temp, &self.path).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&temp).await {
                warn!(
                    path = %temp.display(),
                    error = %cleanup,
                    "Failed to remove temporary terms file"
                );
            }
            return Err(e.into());
        }

        debug!(path = %self.path.display(), bytes = content.len(), "Persisted terms");
        Ok(())
    }
}
