//! ChatTurnHandler - merge a user turn into bounded history, dispatch the
//! context upstream, append the reply, persist.
//!
//! The load -> mutate -> save sequence is not atomic: two concurrent requests
//! for the same user can both load the same snapshot and the last save wins.
//! That race is part of the store's contract, not something this handler
//! works around.

use std::sync::Arc;

use crate::domain::Turn;
use crate::ports::{ChatProvider, ChatProviderError, HistoryStore};

/// Command for one chat turn against the stateful upstream.
#[derive(Debug, Clone)]
pub struct ChatTurnCommand {
    pub user_id: String,
    pub content: String,
}

/// Result of a completed chat turn.
#[derive(Debug, Clone)]
pub struct ChatTurnResult {
    /// The upstream reply text.
    pub reply: String,
    /// The user's full updated turn sequence, as persisted.
    pub history: Vec<Turn>,
}

/// Error type for chat turns.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChatTurnError {
    /// The upstream provider failed; carries its detail.
    #[error("{0}")]
    Provider(#[from] ChatProviderError),
}

/// Handler for the stateful chat route.
pub struct ChatTurnHandler {
    store: Arc<dyn HistoryStore>,
    provider: Arc<dyn ChatProvider>,
    max_turns: usize,
}

impl ChatTurnHandler {
    pub fn new(
        store: Arc<dyn HistoryStore>,
        provider: Arc<dyn ChatProvider>,
        max_turns: usize,
    ) -> Self {
        Self {
            store,
            provider,
            max_turns,
        }
    }

    pub async fn handle(&self, cmd: ChatTurnCommand) -> Result<ChatTurnResult, ChatTurnError> {
        // 1. Load the full conversation map.
        let mut histories = self.store.load().await;

        // 2. Merge the user turn under the bounding/reset policy; the
        //    returned sequence is the exact context sent upstream.
        let context = histories
            .append_user_turn(&cmd.user_id, &cmd.content, self.max_turns)
            .to_vec();

        // 3. Dispatch. On failure the in-memory append is discarded with the
        //    request; nothing is persisted.
        let reply = self.provider.dispatch(&context).await?;

        // 4. Append the reply (no bound re-check) and persist the whole map.
        histories.append_assistant_turn(&cmd.user_id, &reply);
        if let Err(err) = self.store.save(&histories).await {
            tracing::warn!(
                user_id = %cmd.user_id,
                error = %err,
                "failed to persist conversation history"
            );
        }

        let history = histories.turns(&cmd.user_id).to_vec();
        Ok(ChatTurnResult { reply, history })
    }
}
