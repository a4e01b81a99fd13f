//! Crate-wide error type.
//!
//! Failures while building the server. Tool calls never surface these to
//! MCP clients, and transports report through `TransportError`.

use thiserror::Error;

/// Result alias over [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Why the server could not be built.
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the upstream AIS API client.
    #[error("AIS error: {0}")]
    Ais(#[from] crate::domains::tools::definitions::AisError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
