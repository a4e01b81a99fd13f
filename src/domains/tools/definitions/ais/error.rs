//! Errors raised while talking to the AIS API.

use thiserror::Error;

/// Failure kinds of a single vessels lookup.
///
/// The `get_ais_targets` tool collapses all of these into one fixed
/// message; the distinction only reaches the logs.
#[derive(Debug, Error)]
pub enum AisError {
    /// The request did not complete within the configured timeout.
    #[error("AIS request timed out")]
    Timeout,

    /// The API host could not be reached.
    #[error("Connection to AIS API failed: {0}")]
    Connect(String),

    /// The API answered with a non-2xx status.
    #[error("AIS API returned HTTP {0}")]
    Status(u16),

    /// The body was not a JSON array of vessel objects.
    #[error("Invalid AIS response: {0}")]
    Decode(String),

    /// Any other transport-level failure.
    #[error("AIS request failed: {0}")]
    Request(String),

    /// The HTTP client or request URL could not be built.
    #[error("AIS client setup failed: {0}")]
    Client(String),
}

impl AisError {
    /// Whether the failure is on the server side and likely transient.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout | Self::Connect(_) => true,
            Self::Status(code) => *code >= 500 || *code == 429,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for AisError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else if e.is_builder() {
            Self::Client(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}
