//! Command handlers.

pub mod chat_turn;

pub use chat_turn::{ChatTurnCommand, ChatTurnError, ChatTurnHandler, ChatTurnResult};
