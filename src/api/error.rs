use std::error::Error;
use std::fmt;

/// A remote call that did not complete or returned no usable payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never got a response (connection, TLS, body read).
    Transport(String),
    /// The service answered with a non-success status.
    Status { status: u16, url: String },
    /// The body was not the expected JSON.
    Decode(String),
    /// The body was JSON `null`.
    EmptyPayload { url: String },
    /// The service is unreachable (in-memory offline simulation).
    Unavailable,
    /// In-memory storage lock poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "request failed: {}", msg),
            ApiError::Status { status, url } => {
                write!(f, "{} answered with status {}", url, status)
            }
            ApiError::Decode(msg) => write!(f, "unexpected response body: {}", msg),
            ApiError::EmptyPayload { url } => write!(f, "data not fetched from {}", url),
            ApiError::Unavailable => write!(f, "product service unavailable"),
            ApiError::LockPoisoned(operation) => {
                write!(f, "product storage lock poisoned during {}", operation)
            }
        }
    }
}

impl Error for ApiError {}

impl ApiError {
    pub(crate) fn not_found(url: impl Into<String>) -> Self {
        ApiError::Status {
            status: 404,
            url: url.into(),
        }
    }

    /// HTTP-style status code for this error, as the mock server answers it.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Status { status, .. } => *status,
            ApiError::Decode(_) => 400,
            ApiError::Unavailable => 503,
            ApiError::Transport(_) | ApiError::EmptyPayload { .. } | ApiError::LockPoisoned(_) => {
                500
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
