//! API error types

use thiserror::Error;
use yamlsniff_engine::{DecodeError, EngineError};

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[cfg(feature = "serde")]
    #[error("configuration error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        ApiError::Engine(EngineError::Decode(err))
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
