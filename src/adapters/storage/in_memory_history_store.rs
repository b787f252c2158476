//! In-memory History Store Adapter
//!
//! Holds the conversation map behind a mutex. Used by tests; also supports
//! injected save failures for exercising the swallow-and-log path.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::ConversationHistories;
use crate::ports::{HistoryStore, HistoryStoreError};

/// In-memory storage for the conversation history document.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    histories: Mutex<ConversationHistories>,
    fail_saves: bool,
}

impl InMemoryHistoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a conversation map.
    pub fn with_histories(histories: ConversationHistories) -> Self {
        Self {
            histories: Mutex::new(histories),
            fail_saves: false,
        }
    }

    /// Makes every `save` call fail with an I/O error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn load(&self) -> ConversationHistories {
        self.histories.lock().unwrap().clone()
    }

    async fn save(&self, histories: &ConversationHistories) -> Result<(), HistoryStoreError> {
        if self.fail_saves {
            return Err(HistoryStoreError::Io("simulated write failure".to_string()));
        }
        *self.histories.lock().unwrap() = histories.clone();
        Ok(())
    }
}
