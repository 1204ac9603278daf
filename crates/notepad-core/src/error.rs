//! Error types for notepad.

use thiserror::Error;

/// Result type alias using notepad's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for notepad operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or oversized note identifier
    #[error("Invalid note identifier: {0}")]
    InvalidIdentifier(String),

    /// Key-value store call failed (connection error, timeout)
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Invalid request input other than the identifier
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<redis::RedisError> for Error {
    fn from(e: redis::RedisError) -> Self {
        Error::StoreUnavailable(e.to_string())
    }
}

impl Error {
    /// Whether the error originates from the key-value store.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Error::StoreUnavailable(_))
    }
}
