//! Error types

/// Errors that can occur while talking to the slide server.
///
/// The flattening and classification functions are total and never fail;
/// everything here comes from the transport or payload parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP error response from the server.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Network error during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to parse the header payload.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },

    /// Invalid base URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: None,
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::Network(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        assert!(Error::http(429, "throttled").is_retryable());
        assert!(Error::http(503, "unavailable").is_retryable());
        assert!(!Error::http(404, "no such slide").is_retryable());
        assert!(!Error::parse("bad json").is_retryable());
        assert!(!Error::InvalidUrl("not a url".into()).is_retryable());
    }

    #[test]
    fn test_status_code_accessor() {
        assert_eq!(Error::http(404, "missing").status_code(), Some(404));
        assert_eq!(Error::parse("oops").status_code(), None);
    }
}
