//! File-based History Store Adapter
//!
//! Stores the full per-user conversation map as one pretty-printed JSON
//! document. Every load reads the whole file; every save rewrites it. There
//! is no locking and no partial-write protocol; concurrent writers race and
//! the last one wins.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::ConversationHistories;
use crate::ports::{HistoryStore, HistoryStoreError};

/// File-backed storage for the conversation history document.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    /// Create a store backed by the given document path.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileHistoryStore::new("./chat.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The document path this store reads and rewrites.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn load(&self) -> ConversationHistories {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return ConversationHistories::new();
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to read history document, starting empty"
                );
                return ConversationHistories::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(histories) => histories,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "history document is unparseable, starting empty"
                );
                ConversationHistories::new()
            }
        }
    }

    async fn save(&self, histories: &ConversationHistories) -> Result<(), HistoryStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| HistoryStoreError::Io(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(histories)
            .map_err(|e| HistoryStoreError::Serialization(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| HistoryStoreError::Io(e.to_string()))
    }
}
