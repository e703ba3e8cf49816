use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for every Domeneshop API operation.
///
/// Each operation either fully succeeds or reports exactly one of these.
/// Nothing is retried or swallowed inside the client.
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | [`Validation`](Self::Validation) | a record misses a field its type requires; no request is sent |
/// | [`Transport`](Self::Transport) | the HTTP call could not be completed |
/// | [`Decode`](Self::Decode) | the response body does not match the expected JSON shape |
/// | [`Remote`](Self::Remote) | the API answered with a non-success status |
/// | [`Config`](Self::Config) | credentials or client settings are unusable; no request is sent |
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A required field is missing from a DNS record.
    #[error("Missing required field '{field}': {detail}")]
    Validation {
        /// Name of the offending field as it appears on the wire.
        field: String,
        /// Which rule was violated.
        detail: String,
    },

    /// Network-level failure (DNS resolution, connection refused, TLS, timeout, bad URL).
    #[error("Transport error: {detail}")]
    Transport {
        /// Error details from the HTTP stack.
        detail: String,
        /// Whether the failure was a timeout.
        timeout: bool,
    },

    /// The response body could not be parsed as the expected JSON.
    #[error("Decode error: {detail}")]
    Decode {
        /// Details about the parse failure.
        detail: String,
    },

    /// The API returned a non-success status code.
    ///
    /// `body` is the raw response text, passed through verbatim.
    #[error("HTTP {status}: {body}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Credentials or client settings are missing or malformed.
    #[error("Configuration error: {detail}")]
    Config {
        /// What is wrong with the configuration.
        detail: String,
    },

    /// A request body could not be serialized to JSON.
    #[error("Serialization error: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ClientError {
    pub(crate) fn validation(field: &str, detail: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            detail: detail.into(),
        }
    }

    pub(crate) fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub(crate) fn decode(detail: impl ToString) -> Self {
        Self::Decode {
            detail: detail.to_string(),
        }
    }

    /// HTTP status for [`Remote`](Self::Remote) errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server answered (as opposed to the call failing locally or in transit).
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { timeout: true, .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport {
            timeout: e.is_timeout(),
            detail: e.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
