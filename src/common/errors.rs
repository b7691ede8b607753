//! Error types for the sizing library

use thiserror::Error;

/// Result type alias using our SizingError
pub type Result<T> = std::result::Result<T, SizingError>;

/// Main error type for sizing operations
#[derive(Error, Debug)]
pub enum SizingError {
    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A present input value has the wrong type or is out of domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Arithmetic overflow or an unrepresentable power value
    #[error("Computation error: {0}")]
    Computation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for SizingError {
    fn from(err: config::ConfigError) -> Self {
        SizingError::Configuration(err.to_string())
    }
}
