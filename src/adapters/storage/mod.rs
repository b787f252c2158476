//! History store adapters.

pub mod file_history_store;
pub mod in_memory_history_store;

pub use file_history_store::FileHistoryStore;
pub use in_memory_history_store::InMemoryHistoryStore;
