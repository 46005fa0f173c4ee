//! Error types for httpkit.

use thiserror::Error;

/// Boxed error type returned by pluggable components (proxy resolvers).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for httpkit operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors that can occur while issuing a request or handling its response.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Connection, DNS, TLS or timeout failure from the transport
    #[error("transport error for {uri}: {source}")]
    Transport {
        /// Requested URI
        uri: String,
        /// Underlying transport failure
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status other than `200 OK`.
    ///
    /// The response body is discarded, never decoded.
    #[error("unexpected status {status} for {uri}")]
    UnexpectedStatus {
        /// Requested URI
        uri: String,
        /// Status the server actually returned
        status: reqwest::StatusCode,
    },

    /// The outgoing payload could not be encoded; the request was not sent
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// The response body could not be decoded into the target type
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// Local filesystem failure
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The request URI does not parse; nothing was sent
    #[error("invalid url {uri}: {message}")]
    InvalidUrl {
        /// Rejected URI
        uri: String,
        /// Parser message
        message: String,
    },

    /// The proxy resolver rejected the request; nothing was sent
    #[error("proxy resolution failed: {0}")]
    Proxy(#[source] BoxError),

    /// The HTTP client could not be built from the current configuration
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
}

impl HttpError {
    /// Status code carried by an [`HttpError::UnexpectedStatus`], if any.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = HttpError::UnexpectedStatus {
            uri: "http://example.invalid/".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));

        let err = HttpError::Encode("nope".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: HttpError = json_err.into();
        assert!(matches!(err, HttpError::Decode(_)));
    }
}
