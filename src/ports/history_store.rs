//! History Store Port - persistence of the per-user conversation map.
//!
//! The store holds one document: the full mapping of user id to turn
//! sequence. It is read in full on every load and rewritten in full on every
//! save; there is no partial-write protocol and no locking. Concurrent
//! requests may race on the document and the last writer wins - an accepted
//! weakness, not a guarantee this port tries to paper over.

use async_trait::async_trait;

use crate::domain::ConversationHistories;

/// Port for loading and saving the conversation history document.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Loads the full conversation map.
    ///
    /// Implementations return an empty map when the document is absent or
    /// unparseable; read failures are logged by the adapter and never
    /// surfaced to the caller, which treats them as "no history yet".
    async fn load(&self) -> ConversationHistories;

    /// Serializes the full map and overwrites the persisted document.
    ///
    /// Callers log and swallow the error: the in-memory update is still
    /// considered to have happened for the current request.
    async fn save(&self, histories: &ConversationHistories) -> Result<(), HistoryStoreError>;
}

/// History store errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HistoryStoreError {
    /// Reading or writing the document failed.
    #[error("io error: {0}")]
    Io(String),

    /// The map could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
