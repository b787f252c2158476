//! Domain layer - pure conversation logic with no I/O.

pub mod conversation;

pub use conversation::{ConversationHistories, Turn, TurnRole, DEFAULT_MAX_TURNS};
