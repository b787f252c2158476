//! Groq Provider - ChatProvider implementation for Groq's OpenAI-compatible
//! chat completions endpoint.
//!
//! One credential is drawn uniformly at random from the configured pool for
//! every call. There is no rotation state, no sticky assignment and no retry
//! with another credential: a request that fails with a bad key fails.

use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::Turn;
use crate::ports::{ChatProvider, ChatProviderError};

/// Configuration for the Groq provider.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// Credential pool; one key is drawn per request.
    api_keys: Vec<Secret<String>>,
    /// Model identifier sent with every request.
    pub model: String,
    /// Base URL for the OpenAI-compatible API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GroqConfig {
    /// Creates a configuration with the given credential pool.
    pub fn new(api_keys: Vec<String>) -> Self {
        Self {
            api_keys: api_keys.into_iter().map(Secret::new).collect(),
            model: "llama-3.1-70b-versatile".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Number of credentials in the pool.
    pub fn credential_count(&self) -> usize {
        self.api_keys.len()
    }
}

/// Groq API provider implementation.
pub struct GroqProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: GroqConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Draws one credential uniformly at random from the pool.
    fn draw_credential(&self) -> Result<&Secret<String>, ChatProviderError> {
        if self.config.api_keys.is_empty() {
            return Err(ChatProviderError::NoCredentials);
        }
        let index = rand::thread_rng().gen_range(0..self.config.api_keys.len());
        Ok(&self.config.api_keys[index])
    }
}

#[async_trait]
impl ChatProvider for GroqProvider {
    async fn dispatch(&self, messages: &[Turn]) -> Result<String, ChatProviderError> {
        let api_key = self.draw_credential()?;
        let body = GroqRequest {
            model: &self.config.model,
            messages,
        };

        let response = self
            .client
            .post(self.completions_url())
            .header(
                "Authorization",
                format!("Bearer {}", api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatProviderError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ChatProviderError::upstream(status.as_u16(), detail));
        }

        let parsed: GroqResponse = response
            .json()
            .await
            .map_err(|e| ChatProviderError::parse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ChatProviderError::parse("response contained no choices"))
    }
}

/// Request body for the chat completions endpoint.
#[derive(Debug, Serialize)]
struct GroqRequest<'a> {
    model: &'a str,
    messages: &'a [Turn],
}

/// Response body from the chat completions endpoint.
#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqMessage,
}

#[derive(Debug, Deserialize)]
struct GroqMessage {
    content: String,
}
