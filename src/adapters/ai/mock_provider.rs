//! Mock Chat Provider for testing.
//!
//! Configurable queue of replies and errors plus call tracking, so tests can
//! verify both what was dispatched and that nothing was dispatched at all.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockChatProvider::new().with_reply("hi there");
//! let reply = provider.dispatch(&[Turn::user("hello")]).await?;
//! assert_eq!(provider.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::Turn;
use crate::ports::{ChatProvider, ChatProviderError};

/// Mock chat provider with queued responses and call tracking.
#[derive(Debug, Clone, Default)]
pub struct MockChatProvider {
    responses: Arc<Mutex<VecDeque<Result<String, ChatProviderError>>>>,
    calls: Arc<Mutex<Vec<Vec<Turn>>>>,
}

impl MockChatProvider {
    /// Creates a mock with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(reply.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ChatProviderError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of dispatch calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The message sequences of every dispatch call, in order.
    pub fn calls(&self) -> Vec<Vec<Turn>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn dispatch(&self, messages: &[Turn]) -> Result<String, ChatProviderError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ChatProviderError::network("no mock responses queued"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_are_consumed_in_order() {
        let provider = MockChatProvider::new()
            .with_reply("first")
            .with_reply("second");

        assert_eq!(provider.dispatch(&[]).await.unwrap(), "first");
        assert_eq!(provider.dispatch(&[]).await.unwrap(), "second");
    }

    #[tokio::test]
    async fn errors_are_returned_from_the_queue() {
        let provider =
            MockChatProvider::new().with_error(ChatProviderError::upstream(429, "slow down"));

        let result = provider.dispatch(&[Turn::user("hi")]).await;
        assert!(matches!(
            result,
            Err(ChatProviderError::Upstream { status: 429, .. })
        ));
    }

    #[tokio::test]
    async fn calls_are_recorded() {
        let provider = MockChatProvider::new().with_reply("ok");
        assert_eq!(provider.call_count(), 0);

        provider.dispatch(&[Turn::user("hello")]).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.calls()[0], vec![Turn::user("hello")]);
    }

    #[tokio::test]
    async fn empty_queue_yields_network_error() {
        let provider = MockChatProvider::new();
        let result = provider.dispatch(&[]).await;
        assert!(matches!(result, Err(ChatProviderError::Network(_))));
    }
}
