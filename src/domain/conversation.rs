//! Per-user conversation history and the bounding/reset policy.
//!
//! A user's history is an ordered sequence of turns, oldest first; it is the
//! literal message sequence sent upstream. The bound is enforced by wiping
//! the whole sequence once it reaches the maximum, never by trimming from
//! the front. This trades continuity for simplicity: no sliding window.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default cap on stored turns per user before the history is wiped.
pub const DEFAULT_MAX_TURNS: usize = 100;

/// Role of the turn's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// User input.
    User,
    /// Assistant (model) response.
    Assistant,
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who sent this turn.
    pub role: TurnRole,
    /// Turn content.
    pub content: String,
}

impl Turn {
    /// Creates a new turn.
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, content)
    }
}

/// The full per-user conversation map.
///
/// Keys keep insertion order so that persisting and reloading the map yields
/// an equal structure, users and turns in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistories {
    map: IndexMap<String, Vec<Turn>>,
}

impl ConversationHistories {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a stored history.
    pub fn user_count(&self) -> usize {
        self.map.len()
    }

    /// Returns the stored turn sequence for a user (empty if unknown).
    pub fn turns(&self, user_id: &str) -> &[Turn] {
        self.map.get(user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends a user turn under the bounding/reset policy and returns the
    /// now-current sequence, to be sent upstream verbatim.
    ///
    /// If the stored sequence has already reached `max_turns`, it is wiped in
    /// full before the new turn is appended.
    pub fn append_user_turn(
        &mut self,
        user_id: &str,
        content: impl Into<String>,
        max_turns: usize,
    ) -> &[Turn] {
        let turns = self.map.entry(user_id.to_string()).or_default();
        if turns.len() >= max_turns {
            turns.clear();
        }
        turns.push(Turn::user(content));
        turns
    }

    /// Appends an assistant turn to a user's sequence.
    ///
    /// The bound is deliberately not re-checked here: a user+reply pair may
    /// push the stored length to `max_turns + 1` until the next user turn
    /// triggers the reset.
    pub fn append_assistant_turn(&mut self, user_id: &str, content: impl Into<String>) {
        self.map
            .entry(user_id.to_string())
            .or_default()
            .push(Turn::assistant(content));
    }
}
