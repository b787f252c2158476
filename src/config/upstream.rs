//! Upstream provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the multi-turn chat-completion upstream
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Groq API keys, comma-separated (the credential pool)
    #[serde(default)]
    pub groq_api_keys: String,

    /// Model identifier sent with every chat-completion request
    #[serde(default = "default_model")]
    pub groq_model: String,

    /// Base URL for the OpenAI-compatible Groq API
    #[serde(default = "default_base_url")]
    pub groq_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Bound on stored turns per user before the history is wiped
    #[serde(default = "default_max_history_turns")]
    pub max_history_turns: usize,
}

impl UpstreamConfig {
    /// Get the credential pool as a vector
    pub fn api_keys_list(&self) -> Vec<String> {
        self.groq_api_keys
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(String::from)
            .collect()
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate upstream configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_keys_list().is_empty() {
            return Err(ValidationError::NoCredentialsConfigured);
        }
        if self.max_history_turns == 0 {
            return Err(ValidationError::InvalidHistoryBound);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            groq_api_keys: String::new(),
            groq_model: default_model(),
            groq_base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_history_turns: default_max_history_turns(),
        }
    }
}

fn default_model() -> String {
    "llama-3.1-70b-versatile".to_string()
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_max_history_turns() -> usize {
    100
}
