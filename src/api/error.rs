use std::fmt;

/// Error types for Cloudflare API operations
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, timeout)
    Http(String),

    /// The API answered but reported failure
    Request {
        status: Option<u16>,
        messages: Vec<String>,
    },

    /// Response body could not be decoded
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(msg) => {
                write!(f, "HTTP request failed: {}", msg)
            }
            ApiError::Request { status, messages } => {
                write!(f, "Cloudflare API error")?;

                if let Some(code) = status {
                    write!(f, " (HTTP {})", code)?;
                }

                if messages.is_empty() {
                    write!(f, ": request was not successful")
                } else {
                    write!(f, ": {}", messages.join("; "))
                }
            }
            ApiError::Decode(msg) => {
                write!(f, "Failed to decode API response: {}", msg)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
