//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("No upstream credentials configured")]
    NoCredentialsConfigured,

    #[error("History bound must be at least 1")]
    InvalidHistoryBound,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("History document path must not be empty")]
    EmptyHistoryPath,
}
