//! Chat provider adapters.

pub mod groq_provider;
pub mod mock_provider;

pub use groq_provider::{GroqConfig, GroqProvider};
pub use mock_provider::MockChatProvider;
