//! Ports - interfaces the application layer depends on.
//!
//! Adapters implement these traits; the gateway orchestration never touches
//! a concrete store or provider directly.

pub mod chat_provider;
pub mod history_store;

pub use chat_provider::{ChatProvider, ChatProviderError};
pub use history_store::{HistoryStore, HistoryStoreError};
