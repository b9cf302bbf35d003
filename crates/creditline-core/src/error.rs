//! Error types for Creditline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The provider reported an error. The payload is passed through untouched.
    #[error("Credit issue failed: {0}")]
    IssueFailed(serde_json::Value),

    /// Unreadable or invalid CLI/provider configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl Error {
    /// Raw provider payload, if this is an issue failure.
    pub fn provider_payload(&self) -> Option<&serde_json::Value> {
        match self {
            Error::IssueFailed(payload) => Some(payload),
            _ => None,
        }
    }
}
