//! Chat Provider Port - dispatch of a full message context to the multi-turn
//! upstream model.
//!
//! The provider receives the caller's ordered turn sequence verbatim and
//! returns the single reply's text. No retry, no circuit breaking: a failed
//! call is surfaced once, carrying the upstream's error body when one was
//! returned.

use async_trait::async_trait;

use crate::domain::Turn;

/// Port for the multi-turn chat-completion upstream.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Sends the full message sequence upstream and returns the reply text.
    async fn dispatch(&self, messages: &[Turn]) -> Result<String, ChatProviderError>;
}

/// Chat provider errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChatProviderError {
    /// The upstream answered with a non-2xx status; `detail` is its body.
    #[error("upstream returned {status}: {detail}")]
    Upstream { status: u16, detail: String },

    /// Transport failure before a response was received.
    #[error("network error: {0}")]
    Network(String),

    /// The upstream response could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    /// The credential pool is empty.
    #[error("no upstream credentials configured")]
    NoCredentials,
}

impl ChatProviderError {
    /// Creates an upstream error from a status and response body.
    pub fn upstream(status: u16, detail: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            detail: detail.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
