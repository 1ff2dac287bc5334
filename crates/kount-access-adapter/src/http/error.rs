/*
[INPUT]:  Error sources (validation, transport, response parsing)
[OUTPUT]: Structured error type shared by the entire crate
[POS]:    Error handling layer - unified error type
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Access adapter
#[derive(Error, Debug)]
pub enum AccessError {
    /// Transport failure or a non-200 response from the Access API
    #[error("network error: {message}")]
    Network {
        status: Option<u16>,
        message: String,
    },

    /// Digest computation failed
    #[error("encryption error: {0}")]
    Encryption(String),

    /// Missing or malformed data (bad hostnames, invalid fields, unparseable responses)
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Failure while releasing transport resources
    #[error("internal error: {0}")]
    Internal(String),
}

impl AccessError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        AccessError::InvalidData(message.into())
    }

    /// Create a network error from a non-200 response
    pub fn bad_response(status: StatusCode, url: &str) -> Self {
        AccessError::Network {
            status: Some(status.as_u16()),
            message: format!(
                "bad response ({}) {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown"),
                url
            ),
        }
    }

    /// Status code of the failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            AccessError::Network { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if the error came from the transport or a bad response
    pub fn is_network(&self) -> bool {
        matches!(self, AccessError::Network { .. })
    }

    /// Check if the error came from input validation or response parsing
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, AccessError::InvalidData(_))
    }
}

impl From<reqwest::Error> for AccessError {
    fn from(err: reqwest::Error) -> Self {
        AccessError::Network {
            status: err.status().map(|status| status.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for AccessError {
    fn from(err: url::ParseError) -> Self {
        AccessError::InvalidData(format!("bad url: {err}"))
    }
}

/// Result type alias for Access operations
pub type Result<T> = std::result::Result<T, AccessError>;
