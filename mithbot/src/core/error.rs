//! Error types for the bot core.
//!
//! [`MithbotError`] is the top-level error. Transport failures in the update
//! loop are fatal by policy; send failures are logged by the caller.

use thiserror::Error;

/// Top-level error (transport, configuration).
#[derive(Error, Debug)]
pub enum MithbotError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for core operations; uses [`MithbotError`].
pub type Result<T> = std::result::Result<T, MithbotError>;
