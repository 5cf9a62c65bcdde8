//! Errors raised while loading configuration.
//!
//! The tick pipeline itself cannot fail.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum PartyError {
    /// Reading or writing a parameter file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A parameter file was not valid JSON for [`super::params::Params`].
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Parameters parsed but describe an unplayable game.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, PartyError>;
