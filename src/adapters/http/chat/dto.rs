//! HTTP DTOs for the stateful chat route.

use serde::{Deserialize, Serialize};

use crate::domain::Turn;

/// Parameters for a chat turn, from the query string (GET) or a JSON body
/// (POST). `content` is accepted as an alias for `q`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatTurnParams {
    #[serde(default, alias = "content")]
    pub q: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

/// Success envelope for a chat turn.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurnResponse {
    pub status: u16,
    pub reply: String,
    /// The user's full updated turn sequence.
    pub history: Vec<Turn>,
}
