//! History document storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the persisted conversation history document
    #[serde(default = "default_history_path")]
    pub history_path: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_path.trim().is_empty() {
            return Err(ValidationError::EmptyHistoryPath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
        }
    }
}

fn default_history_path() -> String {
    "./chat.json".to_string()
}
