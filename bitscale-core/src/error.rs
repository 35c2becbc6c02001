//! Error types for the bitscale-core library.
//!
//! Every fallible operation in the crate returns [`CoreResult`]. Calculation
//! failures are immediate and local: nothing is retried.

use thiserror::Error;

/// Custom error types for bitscale-core
#[derive(Error, Debug)]
pub enum CoreError {
    /// A configuration value could not be parsed or is out of range.
    #[error("Invalid configuration value for {key} ({value:?}): {reason}")]
    Config {
        key: String,
        value: String,
        reason: String,
    },

    /// Dimensions, framerate or profile values that leave the scaling model undefined.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The codec name has no entry in the efficiency table.
    #[error("Unknown codec: {0}")]
    UnknownCodec(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Builds a [`CoreError::Config`] for the given key and raw value.
    pub fn config(key: &str, value: &str, reason: impl Into<String>) -> Self {
        CoreError::Config {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for bitscale-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
